//! Response envelope shared by every JSON endpoint.
//!
//! Successful responses are `{ "success": true, "message"?: ..., ...payload }`;
//! failures are `{ "success": false, "code", "message", "retry" }` with a
//! matching HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Successful response with its payload fields flattened next to `success`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Failure body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
    /// Whether the client should offer to try again.
    pub retry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>, retry: bool) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.into(),
            retry,
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message, false)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("{} not found: {}", resource_type, id),
            false,
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message, false)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message, true)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message, false)
    }

    /// Replaces the generic code with the domain's own.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// `400` for a path segment that is not a valid id.
pub fn invalid_id(resource_type: &str) -> Response {
    ErrorResponse::bad_request(format!("Invalid {} ID", resource_type))
        .into_response_with(StatusCode::BAD_REQUEST)
}
