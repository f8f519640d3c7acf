//! Route configuration for question endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_question, delete_question, get_question, list_questions, next_order, question_report,
    update_question,
};
use crate::adapters::http::AppState;

/// Creates the question router.
///
/// Routes:
/// - `GET /api/perguntas` - List questions in flow order
/// - `POST /api/perguntas` - Create a question
/// - `GET /api/perguntas/proxima-ordem` - Suggest the next free order
/// - `GET /api/perguntas/relatorio` - Download the question report
/// - `GET /api/perguntas/:id` - Get one question
/// - `PUT /api/perguntas/:id` - Replace a question
/// - `DELETE /api/perguntas/:id` - Delete a question
pub fn question_router() -> Router<AppState> {
    Router::new()
        .route("/api/perguntas", get(list_questions).post(create_question))
        .route("/api/perguntas/proxima-ordem", get(next_order))
        .route("/api/perguntas/relatorio", get(question_report))
        .route(
            "/api/perguntas/:id",
            get(get_question).put(update_question).delete(delete_question),
        )
}
