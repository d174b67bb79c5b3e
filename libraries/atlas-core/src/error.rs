/// Core error types for Atlas
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Atlas
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Geocoding provider errors
    #[error("Geocoding error: {0}")]
    Geocoding(String),

    /// Identifier is not a well-formed key for the store
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl CoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a geocoding error
    pub fn geocoding(msg: impl Into<String>) -> Self {
        Self::Geocoding(msg.into())
    }
}
