//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the storage directory.
    #[error("Failed to open store at {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An underlying filesystem operation failed.
    #[error("Store operation failed: {0}")]
    Io(#[from] std::io::Error),
}
