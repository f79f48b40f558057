//! Local persistence for in-progress wizard state.

mod in_memory;
mod sqlite;
mod state_store;

pub use in_memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use state_store::{STORAGE_KEY, StateStore, StoreError};
