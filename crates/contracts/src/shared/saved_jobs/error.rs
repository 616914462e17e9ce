use thiserror::Error;

/// Failures of the durable client-local storage
#[derive(Error, Debug)]
pub enum StorageError {
    /// No storage backend (private mode, no window, disabled by policy)
    #[error("Storage is not available")]
    Unavailable,

    #[error("Failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// Typically quota exceeded
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
