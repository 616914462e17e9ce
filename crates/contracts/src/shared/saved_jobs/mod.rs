//! Saved-Jobs Cache: bookmarked job snapshots mirrored to client-local storage

pub mod cache;
pub mod error;
pub mod store;

pub use cache::{SavedJobsCache, ToggleOutcome, FORMAT_VERSION};
pub use error::StorageError;
pub use store::{KeyValueStore, MemoryStore};
