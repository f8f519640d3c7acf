//! Application router assembly.

use std::path::Path;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::{chat_router, product_router, question_router, AppState};
use crate::adapters::storage::UPLOADS_ROUTE;
use crate::config::ServerConfig;

/// Multipart overhead allowed on top of the image size limit.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// All API routes, without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(question_router())
        .merge(product_router())
        .merge(chat_router())
        .with_state(state)
}

/// API routes plus static uploads and the HTTP middleware stack.
pub fn app_router(
    state: AppState,
    server: &ServerConfig,
    uploads_dir: &Path,
    max_upload_bytes: usize,
) -> Router {
    let mut router = api_router(state)
        .nest_service(UPLOADS_ROUTE, ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES),
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )));

    if let Some(cors) = cors_layer(server) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http())
}

/// Explicit origins when configured; any origin in development; none otherwise.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if !origins.is_empty() {
        AllowOrigin::list(origins)
    } else if server.is_production() {
        return None;
    } else {
        AllowOrigin::any()
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
