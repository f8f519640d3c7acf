//! HTTP handlers for the chat flow.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

use super::dto::{AbandonPayload, ChatPayload, SelectionRequest, TextAnswerRequest};
use crate::adapters::http::envelope::{invalid_id, Envelope, ErrorResponse};
use crate::adapters::http::AppState;
use crate::application::{
    AbandonFlowCommand, AnswerFlowCommand, FlowAnswer, GetFlowQuery, RestartFlowCommand,
    StartFlowCommand,
};
use crate::domain::flow::{FlowError, FlowSession};
use crate::domain::foundation::FlowSessionId;

fn view(session: &FlowSession, status: StatusCode) -> Response {
    Envelope::ok(ChatPayload::from(session)).into_response_with(status)
}

fn parse_session_id(raw: &str) -> Result<FlowSessionId, Response> {
    raw.parse::<FlowSessionId>()
        .map_err(|_| invalid_id("chat session"))
}

/// POST /api/chat/sessoes - Open a chat and ask the first question
pub async fn start_chat(State(state): State<AppState>) -> Response {
    match state
        .start_flow_handler()
        .handle(StartFlowCommand::default())
        .await
    {
        Ok(session) => view(&session, StatusCode::CREATED),
        Err(e) => handle_flow_error(e),
    }
}

/// GET /api/chat/sessoes/:id
pub async fn get_chat(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .get_flow_handler()
        .handle(GetFlowQuery { session_id })
        .await
    {
        Ok(session) => view(&session, StatusCode::OK),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/chat/sessoes/:id/iniciar - (Re)start with the current question list
pub async fn restart_and_start_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = StartFlowCommand {
        session_id: Some(session_id),
    };
    match state.start_flow_handler().handle(cmd).await {
        Ok(session) => view(&session, StatusCode::OK),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/chat/sessoes/:id/respostas - Typed answer
pub async fn submit_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TextAnswerRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    answer(state, session_id, FlowAnswer::Text(req.texto)).await
}

/// POST /api/chat/sessoes/:id/selecoes - Option chosen
pub async fn select_option(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectionRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let selection = FlowAnswer::Select {
        question_id: req.question_id(),
        option: req.opcao,
    };
    answer(state, session_id, selection).await
}

async fn answer(state: AppState, session_id: FlowSessionId, answer: FlowAnswer) -> Response {
    let cmd = AnswerFlowCommand { session_id, answer };
    match state.answer_flow_handler().handle(cmd).await {
        Ok(session) => view(&session, StatusCode::OK),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/chat/sessoes/:id/reiniciar - Back to the beginning
pub async fn restart_chat(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .restart_flow_handler()
        .handle(RestartFlowCommand { session_id })
        .await
    {
        Ok(session) => view(&session, StatusCode::OK),
        Err(e) => handle_flow_error(e),
    }
}

/// DELETE /api/chat/sessoes/:id - Leave; answers are discarded
pub async fn abandon_chat(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .abandon_flow_handler()
        .handle(AbandonFlowCommand { session_id })
        .await
    {
        Ok(()) => Envelope::ok(AbandonPayload {
            sessao_id: session_id.to_string(),
        })
        .with_message("Consulta encerrada")
        .into_response_with(StatusCode::OK),
        Err(e) => handle_flow_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_flow_error(error: FlowError) -> Response {
    let code = error.code();
    let (status, body) = match error {
        FlowError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Chat session", &id.to_string()),
        ),
        FlowError::NoQuestions => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::unavailable(
                "Nenhuma pergunta cadastrada. Cadastre perguntas antes de iniciar o chat.",
            ),
        ),
        FlowError::QuestionsUnavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::unavailable(
                "Erro ao carregar perguntas. Verifique se o servidor está rodando.",
            ),
        ),
        e @ (FlowError::EmptyAnswer
        | FlowError::InvalidOption { .. }
        | FlowError::KindMismatch(_)) => {
            (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(e.to_string()))
        }
        e @ (FlowError::QuestionNotActive(_)
        | FlowError::InputClosed(_)
        | FlowError::NotFinalizing(_)
        | FlowError::RecommendationInFlight
        | FlowError::InvalidTransition(_)) => {
            (StatusCode::CONFLICT, ErrorResponse::conflict(e.to_string()))
        }
        FlowError::Storage(msg) => {
            tracing::error!(error = %msg, "chat session storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("Erro ao acessar a sessão do chat"),
            )
        }
    };
    body.with_code(code).into_response_with(status)
}
