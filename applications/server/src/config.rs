/// Server configuration
use crate::error::{Result, ServerError};
use atlas_geocoding::{MapboxConfig, DEFAULT_BASE_URL, PLACEHOLDER_ACCESS_TOKEN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_geocoding")]
    pub geocoding: GeocodingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodingSettings {
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    #[serde(default = "default_access_token")]
    pub access_token: String,
}

/// Where user records live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.toml` when `None`),
    /// then apply `ATLAS_` environment overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. ATLAS_GEOCODING__ACCESS_TOKEN
        settings = settings.add_source(
            config::Environment::with_prefix("ATLAS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Provider settings for the geocoding client
    pub fn mapbox_config(&self) -> MapboxConfig {
        MapboxConfig::new(self.geocoding.access_token.clone())
            .with_base_url(self.geocoding.base_url.clone())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.storage.backend == StorageBackend::Sqlite && self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "Database URL is required for the sqlite backend (set ATLAS_STORAGE__DATABASE_URL)"
                    .to_string(),
            ));
        }

        let base_url = &self.geocoding.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerError::Config(format!(
                "Geocoding base URL must start with http:// or https://, got {:?}",
                base_url
            )));
        }

        if self.mapbox_config().uses_placeholder_token() {
            tracing::warn!(
                "Geocoding access token not set (ATLAS_GEOCODING__ACCESS_TOKEN); location lookups will fail"
            );
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: StorageBackend::default(),
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/atlas.db".to_string()
}

fn default_geocoding() -> GeocodingSettings {
    GeocodingSettings {
        base_url: default_geocoding_base_url(),
        access_token: default_access_token(),
    }
}

fn default_geocoding_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_access_token() -> String {
    PLACEHOLDER_ACCESS_TOKEN.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            geocoding: default_geocoding(),
        }
    }
}
