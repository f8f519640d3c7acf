//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `CATALOG_ADVISOR` prefix; nested values are separated by `__`.
//!
//! # Example
//!
//! ```no_run
//! use catalog_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod recommendation;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use recommendation::RecommendationConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog files and image uploads
    #[serde(default)]
    pub storage: StorageConfig,

    /// External recommendation service
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CATALOG_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CATALOG_ADVISOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CATALOG_ADVISOR__RECOMMENDATION__BASE_URL=...` -> `recommendation.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CATALOG_ADVISOR")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.recommendation.validate(&self.server.environment)?;

        // The last answer waits for the recommender inside the request.
        if self.recommendation.enabled
            && self.server.request_timeout_secs <= self.recommendation.timeout_secs
        {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                recommendation_secs: self.recommendation.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
