//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with wire types, handlers and routes;
//! [`router`] assembles them into the application.

pub mod chat;
pub mod envelope;
pub mod products;
pub mod questions;
pub mod router;
mod state;

pub use chat::chat_router;
pub use envelope::{Envelope, ErrorResponse};
pub use products::product_router;
pub use questions::question_router;
pub use router::{api_router, app_router};
pub use state::AppState;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::report::TextReport;

/// Serves a report as a downloadable text file.
pub(crate) fn report_attachment(report: TextReport) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", report.filename);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.body,
    )
        .into_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory wiring for router tests.

    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response};
    use serde_json::Value;
    use tempfile::TempDir;

    use super::AppState;
    use crate::adapters::recommendation::MockRecommendationService;
    use crate::adapters::storage::{
        InMemoryFlowSessionStore, InMemoryProductRepository, InMemoryQuestionRepository,
        LocalImageStorage,
    };

    pub struct TestApp {
        pub state: AppState,
        pub recommendations: MockRecommendationService,
        pub uploads: TempDir,
    }

    pub fn test_app(recommendations: MockRecommendationService) -> TestApp {
        let uploads = TempDir::new().unwrap();
        let state = AppState::new(
            Arc::new(InMemoryQuestionRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(LocalImageStorage::new(uploads.path(), 1024 * 1024)),
            Arc::new(InMemoryFlowSessionStore::new()),
            Arc::new(recommendations.clone()),
        );
        TestApp {
            state,
            recommendations,
            uploads,
        }
    }

    pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
