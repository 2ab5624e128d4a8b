//! Shared error type for persistence ports.

use thiserror::Error;

/// Errors that can occur during persistence operations.
///
/// Every variant is recoverable from the caller's point of view: persistence
/// failures degrade to the local fallback store and never abort a user flow.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Remote store timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Remote store is not configured")]
    Unavailable,
}

impl StorageError {
    /// Creates a not-found error for a record key.
    pub fn not_found(key: impl Into<String>) -> Self {
        StorageError::NotFound(key.into())
    }

    /// Creates a remote store error.
    pub fn remote(message: impl Into<String>) -> Self {
        StorageError::Remote(message.into())
    }
}
