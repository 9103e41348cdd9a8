/*
    errors.rs - Error types for the store subsystem

    Failure taxonomy:
    - validation failures (duplicate registration, bad login) are typed
      errors the caller must handle
    - authorization and not-found conditions on mutations are silent
      no-ops, not errors
    - storage and serialization failures propagate
*/

use thiserror::Error;

/// Errors that can occur in the store subsystem
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration conflicts with an existing email or username
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    /// Login with no matching (email, password) pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored snapshot could not be decoded
    #[error("Corrupted snapshot: {0}")]
    CorruptedSnapshot(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
