mod commands;
mod events;
mod store;

pub use commands::StoreCommand;
pub use events::StoreEvent;
pub use store::{ContentStore, Snapshot, StoreBuilder, StoreError};
