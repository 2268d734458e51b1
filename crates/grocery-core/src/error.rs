//! Error types for grocery list persistence
//!
//! Adapters report failures through [`StoreError`]. The store itself never
//! hands these to its callers: it logs them and keeps the in-memory state.

use thiserror::Error;

/// Errors raised by persistence slots and configuration
#[derive(Debug, Error)]
pub enum StoreError {
    /// Slot could not be read
    #[error("Failed to read persistence slot: {0}")]
    Read(String),

    /// Slot could not be written (storage full, permission denied, ...)
    #[error("Failed to write persistence slot: {0}")]
    Write(String),

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing storage does not exist in this environment
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Invalid store configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Write(err.to_string())
    }
}
