mod use_auth;
mod use_store;

pub use use_auth::{use_auth, AuthContext};
pub use use_store::{use_leaderboard, use_posts, use_store, use_top_entries, StoreContext};
