use crate::domain::{EntryDraft, EntryId, PostDraft, PostId};

/// Mutations the admin UI can request from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    AddPost { draft: PostDraft },

    UpdatePost { id: PostId, draft: PostDraft },

    DeletePost { id: PostId },

    AddEntry { draft: EntryDraft },

    UpdateEntry { id: EntryId, draft: EntryDraft },

    /// Inline score edit from the leaderboard table
    SetScore { id: EntryId, score: i64 },

    DeleteEntry { id: EntryId },
}

impl StoreCommand {
    /// Short name used in events and logs
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::AddPost { .. } => "AddPost",
            StoreCommand::UpdatePost { .. } => "UpdatePost",
            StoreCommand::DeletePost { .. } => "DeletePost",
            StoreCommand::AddEntry { .. } => "AddEntry",
            StoreCommand::UpdateEntry { .. } => "UpdateEntry",
            StoreCommand::SetScore { .. } => "SetScore",
            StoreCommand::DeleteEntry { .. } => "DeleteEntry",
        }
    }
}
