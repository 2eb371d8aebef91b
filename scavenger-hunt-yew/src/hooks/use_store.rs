use scavenger_hunt_core::{LeaderboardEntry, Post, Snapshot, StoreCommand, StoreEvent};
use std::rc::Rc;
use yew::prelude::*;

/// Store state accessible via hook
#[derive(Clone)]
pub struct StoreContext {
    /// Posts and leaderboard as of the last command
    pub snapshot: Rc<Snapshot>,

    /// Outcome of the last command, if any
    pub last_event: Option<StoreEvent>,

    /// Whether changes survive a reload
    pub persistent: bool,

    /// Run a command against the store
    pub send_command: Rc<dyn Fn(StoreCommand)>,
}

impl PartialEq for StoreContext {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
            && self.last_event == other.last_event
            && self.persistent == other.persistent
    }
}

/// Hook to access the content store
///
/// # Example
///
/// ```rust,no_run
/// use scavenger_hunt_core::{EntryDraft, StoreCommand};
/// use scavenger_hunt_yew::use_store;
/// use yew::prelude::*;
///
/// #[function_component(AddTeam)]
/// fn add_team() -> Html {
///     let store = use_store();
///     let onclick = Callback::from(move |_: MouseEvent| {
///         (store.send_command)(StoreCommand::AddEntry {
///             draft: EntryDraft::parse("Harvest Hustlers", "15"),
///         });
///     });
///
///     html! { <button {onclick}>{"Add team"}</button> }
/// }
/// ```
#[hook]
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("use_store must be used within a StoreProvider")
}

/// Posts in feed order
#[hook]
pub fn use_posts() -> Vec<Post> {
    use_store().snapshot.posts.clone()
}

/// Leaderboard sorted by descending score
#[hook]
pub fn use_leaderboard() -> Vec<LeaderboardEntry> {
    use_store().snapshot.leaderboard.clone()
}

/// The `n` best-ranked leaderboard entries
#[hook]
pub fn use_top_entries(n: usize) -> Vec<LeaderboardEntry> {
    use_store()
        .snapshot
        .leaderboard
        .iter()
        .take(n)
        .cloned()
        .collect()
}
