use cucumber::{given, then, when};
use scavenger_hunt_core::{Seed, StoreEvent};
use scavenger_hunt_tests::HuntWorld;

// ===== Given Steps =====

#[given("the default seed content")]
async fn default_seed_content(world: &mut HuntWorld) {
    world.seed = Seed::default();
    world.open();
}

#[given("an empty store")]
async fn empty_store(world: &mut HuntWorld) {
    world.seed = Seed::empty();
    world.open();
}

// ===== When Steps =====

#[when("the store is opened")]
async fn store_is_opened(world: &mut HuntWorld) {
    world.open();
}

#[when("the page is reloaded")]
async fn page_is_reloaded(world: &mut HuntWorld) {
    world.open();
}

// ===== Then Steps =====

#[then("the last command is ignored")]
async fn last_command_ignored(world: &mut HuntWorld) {
    assert!(
        matches!(world.last_event(), StoreEvent::Ignored { .. }),
        "Expected Ignored, got {:?}",
        world.last_event()
    );
}

#[then(expr = "the last command fails with {string}")]
async fn last_command_fails(world: &mut HuntWorld, expected: String) {
    match world.last_event() {
        StoreEvent::CommandFailed { reason, .. } => assert_eq!(reason, &expected),
        other => panic!("Expected CommandFailed, got {:?}", other),
    }
}
