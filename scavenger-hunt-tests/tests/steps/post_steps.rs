use cucumber::{then, when};
use scavenger_hunt_core::{Difficulty, PostDraft, StoreCommand};
use scavenger_hunt_tests::HuntWorld;

fn draft(title: &str) -> PostDraft {
    PostDraft::new(
        title,
        "Snap a photo of something orange.",
        Difficulty::Easy,
        "15 minutes",
    )
    .with_hints(["Look up"])
}

// ===== When Steps =====

#[when(expr = "I add a post titled {string}")]
async fn add_post(world: &mut HuntWorld, title: String) {
    world.execute(StoreCommand::AddPost {
        draft: draft(&title),
    });
}

#[when(expr = "I retitle post {string} to {string}")]
async fn retitle_post(world: &mut HuntWorld, title: String, new_title: String) {
    let id = world.post_id(&title);
    let mut draft = PostDraft::from(world.post_by_title(&title));
    draft.title = new_title;

    world.execute(StoreCommand::UpdatePost { id, draft });
}

#[when(expr = "I update the post with id {int}")]
async fn update_post_by_id(world: &mut HuntWorld, id: u64) {
    world.execute(StoreCommand::UpdatePost {
        id,
        draft: draft("Ghost"),
    });
}

#[when(expr = "I delete post {string}")]
async fn delete_post(world: &mut HuntWorld, title: String) {
    let id = world.post_id(&title);
    world.execute(StoreCommand::DeletePost { id });
}

#[when(expr = "I delete the post with id {int}")]
async fn delete_post_by_id(world: &mut HuntWorld, id: u64) {
    world.execute(StoreCommand::DeletePost { id });
}

// ===== Then Steps =====

#[then(expr = "post {string} has id {int}")]
async fn post_has_id(world: &mut HuntWorld, title: String, id: u64) {
    assert_eq!(world.post_by_title(&title).id, id);
}

#[then(expr = "post {string} is authored by {string}")]
async fn post_author(world: &mut HuntWorld, title: String, author: String) {
    assert_eq!(world.post_by_title(&title).author, author);
}

#[then(expr = "post {string} is dated today")]
async fn post_dated_today(world: &mut HuntWorld, title: String) {
    assert_eq!(world.post_by_title(&title).date, world.today);
}

#[then(expr = "post {string} is at position {int}")]
async fn post_position(world: &mut HuntWorld, title: String, position: usize) {
    let id = world.post_id(&title);
    let index = world
        .store()
        .posts()
        .iter()
        .position(|p| p.id == id)
        .unwrap_or_else(|| panic!("Post '{}' is not in the feed", title));

    assert_eq!(index + 1, position);
}

#[then(expr = "post {string} is protected")]
async fn post_protected(world: &mut HuntWorld, title: String) {
    let id = world.post_id(&title);
    assert!(world.store().is_protected(id));
}

#[then(expr = "post {string} is gone")]
async fn post_gone(world: &mut HuntWorld, title: String) {
    let id = world.post_id(&title);
    assert!(world.store().post(id).is_none());
}

#[then(expr = "the feed has {int} posts")]
async fn feed_size(world: &mut HuntWorld, count: usize) {
    assert_eq!(world.store().posts().len(), count);
}
