//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Upload size limit must be between 1 byte and 50 MiB")]
    InvalidUploadLimit,

    #[error("Recommendation service URL must start with http:// or https://")]
    InvalidRecommendationUrl,

    #[error("Recommendation service must use HTTPS in production")]
    RecommendationUrlMustBeHttps,

    #[error("Request timeout ({request_secs}s) must exceed the recommendation timeout ({recommendation_secs}s)")]
    RequestTimeoutTooShort {
        request_secs: u64,
        recommendation_secs: u64,
    },

    #[error("Chat session idle TTL must be positive")]
    InvalidSessionTtl,
}
