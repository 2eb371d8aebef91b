use crate::domain::{LeaderboardEntry, Post};

/// Outcome of a `StoreCommand`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    PostAdded { post: Post },

    PostUpdated { post: Post },

    PostDeleted { post: Post },

    EntryAdded { entry: LeaderboardEntry },

    /// Name, members or score changed; the board has been re-sorted
    EntryUpdated { entry: LeaderboardEntry },

    EntryDeleted { entry: LeaderboardEntry },

    /// Command was a no-op (protected post, unknown ID on delete)
    Ignored { command: String, reason: String },

    /// Command referenced something that does not exist
    CommandFailed { command: String, reason: String },
}

impl StoreEvent {
    /// Whether the command changed store state
    pub fn changed_state(&self) -> bool {
        !matches!(
            self,
            StoreEvent::Ignored { .. } | StoreEvent::CommandFailed { .. }
        )
    }
}
