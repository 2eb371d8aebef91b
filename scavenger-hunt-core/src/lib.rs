pub mod application;
pub mod clock;
pub mod config;
pub mod domain;
pub mod seed;
pub mod storage;

pub use application::{ContentStore, Snapshot, StoreBuilder, StoreCommand, StoreError, StoreEvent};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AuthConfig, StoreConfig};
pub use domain::{
    parse_score, AuthGate, Difficulty, DraftError, EntryDraft, EntryId, Leaderboard,
    LeaderboardEntry, LoginOutcome, Post, PostDraft, PostId, RankedEntry,
};
pub use seed::Seed;
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
