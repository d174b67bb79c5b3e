//! Geocoding provider seam

use crate::error::Result;
use crate::types::Coordinates;
use async_trait::async_trait;

/// Resolves free-text addresses to coordinates
///
/// Each call is expected to make at most one outbound request; callers do not
/// retry.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve an address to the best matching coordinates
    async fn resolve(&self, address: &str) -> Result<Coordinates>;
}
