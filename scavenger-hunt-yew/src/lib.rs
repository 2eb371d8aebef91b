//! # Scavenger Hunt Yew bindings
//!
//! Browser storage, context providers and hooks that put the content store
//! and the admin auth gate into a Yew component tree.

pub mod components;
pub mod config;
pub mod hooks;
pub mod providers;
pub mod storage;

// Re-exports for convenience
pub use components::{AdminLogin, AdminOnly};
pub use config::AppConfig;
pub use hooks::{
    use_auth, use_leaderboard, use_posts, use_store, use_top_entries, AuthContext, StoreContext,
};
pub use providers::{AuthProvider, AuthProviderProps, StoreProvider, StoreProviderProps};
pub use storage::{BrowserStorage, LocalStorage};

/// Route `tracing` output to the browser console
pub fn init_tracing() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
