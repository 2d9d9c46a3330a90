//! Storage Errors

use thiserror::Error;

/// Failures of the persistence layer.
///
/// None of these reach the UI: the favorites store recovers from each one
/// and logs it.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// Stored record is not a JSON array of strings
    #[error("corrupt record under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
