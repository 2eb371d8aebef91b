mod auth_provider;
mod store_provider;

pub use auth_provider::{AuthProvider, AuthProviderProps};
pub use store_provider::{StoreProvider, StoreProviderProps};
