//! Recommendation service port.
//!
//! The service is opaque: it receives the answer set and replies with a
//! product name and the rules behind it. Parsing is lenient, so a reply
//! that cannot be used still yields a `RecommendationOutcome::Failed`.

use async_trait::async_trait;

use crate::domain::flow::AnswerSet;
use crate::domain::foundation::ErrorCode;
use crate::domain::recommendation::RecommendationOutcome;

/// Reasons the service could not be consulted at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    /// Connection refused, DNS failure and similar.
    #[error("recommendation service unavailable: {message}")]
    Unavailable { message: String },

    #[error("recommendation request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The reply was not JSON.
    #[error("invalid recommendation response: {0}")]
    InvalidResponse(String),

    /// Recommendations are switched off in configuration.
    #[error("recommendation service disabled")]
    Disabled,
}

impl RecommendationError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidResponse(_) => ErrorCode::InvalidRecommendation,
            _ => ErrorCode::RecommendationUnavailable,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }
}

#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Asks for a recommendation for a complete answer set.
    async fn recommend(&self, answers: &AnswerSet) -> Result<RecommendationOutcome, RecommendationError>;
}
