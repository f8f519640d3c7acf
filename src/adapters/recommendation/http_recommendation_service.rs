//! HTTP client for the external recommendation service.
//!
//! Sends `POST {base_url}/api/recomendar-produto` with `{ "respostas": … }`
//! and reads back `{ success, produto?, regras?, message? }`.
//!
//! Non-2xx replies are still parsed: the service reports its own failures
//! with `success: false` and a message, which the user should see.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::flow::AnswerSet;
use crate::domain::recommendation::RecommendationOutcome;
use crate::ports::{RecommendationError, RecommendationService};

const RECOMMEND_PATH: &str = "/api/recomendar-produto";

/// Connection settings for the recommendation service.
#[derive(Debug, Clone)]
pub struct HttpRecommendationConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sent as a bearer token when present.
    api_key: Option<Secret<String>>,
}

impl HttpRecommendationConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }
}

#[derive(Serialize)]
struct RecommendRequest<'a> {
    respostas: &'a AnswerSet,
}

pub struct HttpRecommendationService {
    config: HttpRecommendationConfig,
    client: Client,
}

impl HttpRecommendationService {
    /// # Errors
    ///
    /// - `Unavailable` if the HTTP client cannot be built
    pub fn new(config: HttpRecommendationConfig) -> Result<Self, RecommendationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RecommendationError::unavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn recommend_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), RECOMMEND_PATH)
    }

    fn map_send_error(&self, err: reqwest::Error) -> RecommendationError {
        if err.is_timeout() {
            RecommendationError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            RecommendationError::unavailable(format!("connection failed: {}", err))
        } else {
            RecommendationError::unavailable(err.to_string())
        }
    }

    async fn read_payload(&self, response: Response) -> Result<serde_json::Value, RecommendationError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(e))?;

        match serde_json::from_str(&body) {
            Ok(payload) => Ok(payload),
            Err(_) if status.is_server_error() => Err(RecommendationError::unavailable(format!(
                "server error {}",
                status
            ))),
            Err(e) => Err(RecommendationError::InvalidResponse(format!(
                "status {}: {}",
                status, e
            ))),
        }
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    async fn recommend(&self, answers: &AnswerSet) -> Result<RecommendationOutcome, RecommendationError> {
        let mut request = self
            .client
            .post(self.recommend_url())
            .json(&RecommendRequest { respostas: answers });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let payload = self.read_payload(response).await?;
        Ok(RecommendationOutcome::from_json(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;

    #[test]
    fn url_joins_without_double_slash() {
        let service =
            HttpRecommendationService::new(HttpRecommendationConfig::new("http://localhost:3000/"))
                .unwrap();
        assert_eq!(
            service.recommend_url(),
            "http://localhost:3000/api/recomendar-produto"
        );
    }

    #[test]
    fn request_body_wraps_answers() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::new(1), "B");
        let body = serde_json::to_value(RecommendRequest { respostas: &answers }).unwrap();
        assert_eq!(body, serde_json::json!({"respostas": {"1": "B"}}));
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let service = HttpRecommendationService::new(
            HttpRecommendationConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = service.recommend(&AnswerSet::new()).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
