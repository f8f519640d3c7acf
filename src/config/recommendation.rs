//! Recommendation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Recommendation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Base URL; `/api/recomendar-produto` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional bearer token
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// When false every consultation ends with the fallback message
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl RecommendationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate recommendation configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidRecommendationUrl);
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::RecommendationUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            enabled: default_enabled(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecommendationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.has_api_key());
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = RecommendationConfig {
            base_url: "localhost:5000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidRecommendationUrl)
        );
    }

    #[test]
    fn test_production_requires_https() {
        let config = RecommendationConfig::default();
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::RecommendationUrlMustBeHttps)
        );
    }

    #[test]
    fn test_disabled_skips_url_checks() {
        let config = RecommendationConfig {
            base_url: String::new(),
            enabled: false,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }
}
