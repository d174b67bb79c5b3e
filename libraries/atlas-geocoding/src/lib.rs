//! Mapbox geocoding client for Atlas.
//!
//! Implements [`atlas_core::Geocoder`] on top of the Mapbox place-search
//! endpoint. Each call issues exactly one GET request; there is no caching,
//! retrying or request timeout.
//!
//! # Example
//!
//! ```ignore
//! use atlas_geocoding::{MapboxConfig, MapboxGeocoder};
//!
//! let geocoder = MapboxGeocoder::new(MapboxConfig::new("pk.my-token"))?;
//! let coords = geocoder.search("Los Angeles").await?;
//! println!("{}, {}", coords.latitude, coords.longitude);
//! ```

mod client;
mod error;
mod types;

pub use client::{place_query, MapboxGeocoder};
pub use error::{GeocodingError, Result};
pub use types::{
    Feature, MapboxConfig, PlacesResponse, DEFAULT_BASE_URL, PLACEHOLDER_ACCESS_TOKEN,
};
