pub mod auth;
pub mod draft;
pub mod feed;
mod ids;
pub mod leaderboard;
pub mod post;

pub use auth::{AuthGate, LoginOutcome};
pub use draft::{DraftError, EntryDraft, PostDraft};
pub use feed::{PostFeed, RemoveRefusal};
pub use leaderboard::{parse_score, EntryId, Leaderboard, LeaderboardEntry, RankedEntry};
pub use post::{Difficulty, Post, PostId, UnknownDifficulty};
