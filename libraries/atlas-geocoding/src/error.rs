//! Error types for the geocoding client.

use thiserror::Error;

/// Errors that can occur when talking to the geocoding provider.
#[derive(Error, Debug)]
pub enum GeocodingError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned status {status}")]
    Status { status: u16 },

    /// Failed to parse provider response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Provider found no matching place
    #[error("No features in response")]
    NoFeatures,

    /// First feature's center is not a `[lon, lat]` pair
    #[error("Feature center has {0} components, expected 2")]
    InvalidCenter(usize),

    /// Invalid provider base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result type for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodingError>;

impl From<GeocodingError> for atlas_core::CoreError {
    fn from(err: GeocodingError) -> Self {
        atlas_core::CoreError::geocoding(err.to_string())
    }
}
