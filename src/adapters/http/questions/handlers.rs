//! HTTP handlers for question endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::json;

use super::dto::{NextOrderPayload, QuestionListPayload, QuestionPayload, QuestionRequest};
use crate::adapters::http::envelope::{invalid_id, Envelope, ErrorResponse};
use crate::adapters::http::report_attachment;
use crate::adapters::http::AppState;
use crate::application::{
    CreateQuestionCommand, DeleteQuestionCommand, GetQuestionQuery, UpdateQuestionCommand,
};
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::QuestionId;

/// GET /api/perguntas - All questions in flow order
pub async fn list_questions(State(state): State<AppState>) -> Response {
    match state.list_questions_handler().handle().await {
        Ok(questions) => {
            Envelope::ok(QuestionListPayload::from(questions)).into_response_with(StatusCode::OK)
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/perguntas/:id
pub async fn get_question(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<QuestionId>() else {
        return invalid_id("question");
    };

    match state.get_question_handler().handle(GetQuestionQuery { id }).await {
        Ok(question) => {
            Envelope::ok(QuestionPayload::from(&question)).into_response_with(StatusCode::OK)
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// POST /api/perguntas
pub async fn create_question(
    State(state): State<AppState>,
    Json(req): Json<QuestionRequest>,
) -> Response {
    let kind = match req.kind() {
        Ok(kind) => kind,
        Err(e) => return handle_catalog_error(e.into()),
    };

    let cmd = CreateQuestionCommand {
        text: req.pergunta,
        kind,
        order: req.ordem,
        options: req.opcoes,
    };

    match state.create_question_handler().handle(cmd).await {
        Ok(question) => Envelope::ok(QuestionPayload::from(&question))
            .with_message("Pergunta cadastrada com sucesso!")
            .into_response_with(StatusCode::CREATED),
        Err(e) => handle_catalog_error(e),
    }
}

/// PUT /api/perguntas/:id
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QuestionRequest>,
) -> Response {
    let Ok(id) = id.parse::<QuestionId>() else {
        return invalid_id("question");
    };
    let kind = match req.kind() {
        Ok(kind) => kind,
        Err(e) => return handle_catalog_error(e.into()),
    };

    let cmd = UpdateQuestionCommand {
        id,
        text: req.pergunta,
        kind,
        order: req.ordem,
        options: req.opcoes,
    };

    match state.update_question_handler().handle(cmd).await {
        Ok(question) => Envelope::ok(QuestionPayload::from(&question))
            .with_message("Pergunta atualizada com sucesso!")
            .into_response_with(StatusCode::OK),
        Err(e) => handle_catalog_error(e),
    }
}

/// DELETE /api/perguntas/:id
pub async fn delete_question(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<QuestionId>() else {
        return invalid_id("question");
    };

    match state
        .delete_question_handler()
        .handle(DeleteQuestionCommand { id })
        .await
    {
        Ok(question) => Envelope::ok(QuestionPayload::from(&question))
            .with_message("Pergunta excluída com sucesso!")
            .into_response_with(StatusCode::OK),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/perguntas/proxima-ordem - First unused order
pub async fn next_order(State(state): State<AppState>) -> Response {
    match state.next_order_handler().handle().await {
        Ok(ordem) => Envelope::ok(NextOrderPayload { ordem }).into_response_with(StatusCode::OK),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/perguntas/relatorio - Plain-text report download
pub async fn question_report(State(state): State<AppState>) -> Response {
    match state.question_report_handler().handle().await {
        Ok(report) => report_attachment(report),
        Err(e) => handle_catalog_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_catalog_error(error: CatalogError) -> Response {
    let code = error.code();
    let (status, body) = match error {
        CatalogError::QuestionNotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Question", &id.to_string()),
        ),
        CatalogError::ProductNotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Product", &id.to_string()),
        ),
        CatalogError::DuplicateOrder {
            order,
            existing_id,
            existing_text,
        } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request(format!(
                "A ordem {} já está sendo usada pela pergunta: \"{}\". Escolha uma ordem diferente.",
                order, existing_text
            ))
            .with_details(json!({
                "ordem": order,
                "perguntaExistente": { "id": existing_id.value(), "pergunta": existing_text }
            })),
        ),
        CatalogError::Validation(e) => {
            let field = e.field().to_string();
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(e.to_string()).with_details(json!({ "campo": field })),
            )
        }
        CatalogError::Storage(msg) => {
            tracing::error!(error = %msg, "catalog storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("Erro ao acessar os dados do catálogo"),
            )
        }
    };
    body.with_code(code).into_response_with(status)
}
