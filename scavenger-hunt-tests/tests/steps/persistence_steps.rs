use cucumber::gherkin::Step;
use cucumber::{given, then};
use scavenger_hunt_core::{KeyValueStore, LeaderboardEntry, StoreConfig};
use scavenger_hunt_tests::HuntWorld;

// ===== Given Steps =====

#[given(expr = "the saved leaderboard is {string}")]
async fn saved_leaderboard_raw(world: &mut HuntWorld, raw: String) {
    let key = StoreConfig::default().leaderboard_key;
    world.storage.set(&key, &raw).expect("Memory storage never fails");
}

#[given(expr = "the saved leaderboard holds team {string} with score {int}")]
async fn saved_leaderboard_team(world: &mut HuntWorld, name: String, score: i64) {
    let entries = vec![LeaderboardEntry {
        id: 7,
        name,
        score,
        members: Vec::new(),
    }];
    let raw = serde_json::to_string(&entries).expect("Entries serialize");

    saved_leaderboard_raw(world, raw).await;
}

#[given("the saved leaderboard holds:")]
async fn saved_leaderboard_table(world: &mut HuntWorld, step: &Step) {
    let table = step.table.as_ref().expect("Entries table required");
    let entries: Vec<LeaderboardEntry> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| LeaderboardEntry {
            id: row[0].parse().expect("Id must be a number"),
            name: row[1].clone(),
            score: row[2].parse().expect("Score must be a number"),
            members: Vec::new(),
        })
        .collect();
    let raw = serde_json::to_string(&entries).expect("Entries serialize");

    saved_leaderboard_raw(world, raw).await;
}

#[given(expr = "the saved posts are {string}")]
async fn saved_posts_raw(world: &mut HuntWorld, raw: String) {
    let key = StoreConfig::default().posts_key;
    world.storage.set(&key, &raw).expect("Memory storage never fails");
}

// ===== Then Steps =====

#[then(expr = "storage holds {int} leaderboard entries")]
async fn storage_holds_entries(world: &mut HuntWorld, count: usize) {
    let key = &world.store().config().leaderboard_key;
    let raw = world
        .store()
        .storage()
        .get(key)
        .expect("Memory storage never fails")
        .expect("Leaderboard was never written");
    let entries: Vec<LeaderboardEntry> =
        serde_json::from_str(&raw).expect("Saved leaderboard is valid JSON");

    assert_eq!(entries.len(), count);
}

#[then("nothing has been written to storage")]
async fn nothing_written(world: &mut HuntWorld) {
    assert!(world.store().storage().is_empty());
}
