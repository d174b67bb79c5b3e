//! Mapbox place-search client.

use crate::error::{GeocodingError, Result};
use crate::types::{MapboxConfig, PlacesResponse};
use async_trait::async_trait;
use atlas_core::{Coordinates, Geocoder};
use reqwest::Client;
use tracing::debug;

/// Client for the Mapbox place-search endpoint.
///
/// No request timeout is configured: a provider that never answers holds the
/// caller until the connection drops.
pub struct MapboxGeocoder {
    http: Client,
    base_url: String,
    access_token: String,
}

impl MapboxGeocoder {
    /// Create a new client with the given configuration.
    pub fn new(config: MapboxConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(GeocodingError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(GeocodingError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .user_agent(format!("Atlas/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token,
        })
    }

    /// Get the provider base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full place-search URL for an address, token included.
    ///
    /// Only whitespace is escaped. Reserved characters such as `#`, `?` or `/`
    /// in the address or token reach the URL as-is and can truncate the path
    /// or the `access_token` query.
    pub fn search_url(&self, address: &str) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}",
            self.base_url,
            place_query(address),
            self.access_token
        )
    }

    /// Look up an address and return the first feature's center.
    pub async fn search(&self, address: &str) -> Result<Coordinates> {
        let url = self.search_url(address);

        debug!(query = %place_query(address), "Searching places");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status {
                status: status.as_u16(),
            });
        }

        let places: PlacesResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::Parse(e.to_string()))?;

        let feature = places
            .features
            .into_iter()
            .next()
            .ok_or(GeocodingError::NoFeatures)?;

        match feature.center.as_slice() {
            [longitude, latitude, ..] => Ok(Coordinates::from_lon_lat(*longitude, *latitude)),
            other => Err(GeocodingError::InvalidCenter(other.len())),
        }
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn resolve(&self, address: &str) -> atlas_core::Result<Coordinates> {
        Ok(self.search(address).await?)
    }
}

/// Turn free-text into a place-search path token: each whitespace character
/// becomes `%20`.
pub fn place_query(address: &str) -> String {
    address.replace(char::is_whitespace, "%20")
}
