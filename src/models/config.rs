//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Status service client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Known locations, in id order (first entry is id 1)
    #[serde(default = "defaults::locations")]
    pub locations: Vec<LocationConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.client.validate()?;

        if self.locations.is_empty() {
            return Err(AppError::validation("No locations defined"));
        }
        if let Some(position) = self
            .locations
            .iter()
            .position(|l| l.name.trim().is_empty())
        {
            return Err(AppError::validation(format!(
                "locations[{position}] has an empty name"
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            logging: LoggingConfig::default(),
            locations: defaults::locations(),
        }
    }
}

/// HTTP client settings for the status service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL of the location status endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Check the settings a status client cannot work without.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(AppError::validation("client.user_agent is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::validation("client.timeout_secs must be > 0"));
        }

        let endpoint = Url::parse(&self.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "client.endpoint must be http(s), got '{}'",
                endpoint.scheme()
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// A location as declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Display name
    pub name: String,

    /// Image asset reference
    pub image: String,
}

mod defaults {
    use super::LocationConfig;

    // Client defaults
    pub fn endpoint() -> String {
        "https://calvinfreespace.herokuapp.com/locationstatus".into()
    }
    pub fn user_agent() -> String {
        concat!("freespace/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }

    // Location defaults
    pub fn locations() -> Vec<LocationConfig> {
        [
            ("Commons Dining Hall", "assets/locations/commons.jpg"),
            ("Knollcrest Dining Hall", "assets/locations/knollcrest.jpg"),
            ("Uppercrust", "assets/locations/uppercrust.jpg"),
            ("Johnny's", "assets/locations/johnnys2.jpg"),
            ("Peet's Coffee", "assets/locations/peets.jpg"),
        ]
        .into_iter()
        .map(|(name, image)| LocationConfig {
            name: name.to_string(),
            image: image.to_string(),
        })
        .collect()
    }
}
