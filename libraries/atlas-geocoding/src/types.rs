//! Types for the Mapbox place-search API.

use serde::Deserialize;

/// Public Mapbox API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Token used when none is configured. The provider rejects it.
pub const PLACEHOLDER_ACCESS_TOKEN: &str = "MUST-REPLACE-WITH-APIKEY-TO-PASS-TEST";

/// Configuration for connecting to the geocoding provider.
#[derive(Debug, Clone)]
pub struct MapboxConfig {
    /// Base URL of the provider (e.g., "https://api.mapbox.com")
    pub base_url: String,
    /// Access token sent as the `access_token` query parameter
    pub access_token: String,
}

impl MapboxConfig {
    /// Create a config against the public Mapbox host.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Point the client at a different host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// True when the placeholder token is still in use.
    pub fn uses_placeholder_token(&self) -> bool {
        self.access_token == PLACEHOLDER_ACCESS_TOKEN
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Place-search response body. Only the fields Atlas reads are modelled.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single place result.
#[derive(Debug, Deserialize)]
pub struct Feature {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub center: Vec<f64>,
}
