use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use scavenger_hunt_core::{EntryDraft, LeaderboardEntry, Seed, StoreCommand};
use scavenger_hunt_tests::HuntWorld;

// ===== Given Steps =====

#[given("a leaderboard with teams:")]
async fn leaderboard_with_teams(world: &mut HuntWorld, step: &Step) {
    let table = step.table.as_ref().expect("Teams table required");

    let entries = table
        .rows
        .iter()
        .skip(1)
        .zip(1..)
        .map(|(row, id)| LeaderboardEntry {
            id,
            name: row[0].clone(),
            score: row[1].parse().expect("Score must be a number"),
            members: Vec::new(),
        })
        .collect();

    world.seed = Seed::new(Vec::new(), entries);
    world.open();
}

// ===== When Steps =====

#[when(expr = "I add team {string} with score {string}")]
async fn add_team(world: &mut HuntWorld, name: String, score: String) {
    world.execute(StoreCommand::AddEntry {
        draft: EntryDraft::parse(name, &score),
    });
}

#[when(expr = "I set the score of {string} to {int}")]
async fn set_score(world: &mut HuntWorld, name: String, score: i64) {
    let id = world.entry_id(&name);
    world.execute(StoreCommand::SetScore { id, score });
}

#[when(expr = "I rename team {string} to {string}")]
async fn rename_team(world: &mut HuntWorld, name: String, new_name: String) {
    let id = world.entry_id(&name);
    let mut draft = EntryDraft::from(world.entry_by_name(&name));
    draft.name = new_name;

    world.execute(StoreCommand::UpdateEntry { id, draft });
}

#[when(expr = "I delete team {string}")]
async fn delete_team(world: &mut HuntWorld, name: String) {
    let id = world.entry_id(&name);
    world.execute(StoreCommand::DeleteEntry { id });
}

#[when(expr = "I delete the leaderboard entry with id {int}")]
async fn delete_entry_by_id(world: &mut HuntWorld, id: u64) {
    world.execute(StoreCommand::DeleteEntry { id });
}

#[when(expr = "I set the score of entry {int} to {int}")]
async fn set_score_by_id(world: &mut HuntWorld, id: u64, score: i64) {
    world.execute(StoreCommand::SetScore { id, score });
}

// ===== Then Steps =====

#[then(expr = "the leaderboard order is {string}")]
async fn leaderboard_order(world: &mut HuntWorld, expected: String) {
    let names: Vec<&str> = world
        .store()
        .leaderboard()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    let expected: Vec<&str> = expected.split(", ").collect();

    assert_eq!(names, expected);
}

#[then(expr = "the top {int} teams are {string}")]
async fn top_teams(world: &mut HuntWorld, n: usize, expected: String) {
    let names: Vec<&str> = world
        .store()
        .top_entries(n)
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    let expected: Vec<&str> = expected.split(", ").collect();

    assert_eq!(names, expected);
}

#[then(expr = "team {string} has id {int}")]
async fn team_has_id(world: &mut HuntWorld, name: String, id: u64) {
    assert_eq!(world.entry_by_name(&name).id, id);
}

#[then(expr = "team {string} has score {int}")]
async fn team_has_score(world: &mut HuntWorld, name: String, score: i64) {
    assert_eq!(world.entry_by_name(&name).score, score);
}

#[then(expr = "team {string} is ranked {int}")]
async fn team_is_ranked(world: &mut HuntWorld, name: String, rank: usize) {
    let id = world.entry_id(&name);
    assert_eq!(world.store().rank_of(id), Some(rank));
}

#[then(expr = "the leaderboard has {int} entries")]
async fn leaderboard_size(world: &mut HuntWorld, count: usize) {
    assert_eq!(world.store().leaderboard().len(), count);
}

#[then(expr = "searching the leaderboard for {string} finds {string}")]
async fn search_finds(world: &mut HuntWorld, term: String, expected: String) {
    let found: Vec<String> = world
        .store()
        .search_leaderboard(&term)
        .iter()
        .map(|r| format!("{}. {}", r.rank, r.entry.name))
        .collect();

    assert_eq!(found.join(", "), expected);
}
