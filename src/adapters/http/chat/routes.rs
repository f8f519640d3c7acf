//! Route configuration for the chat flow.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    abandon_chat, get_chat, restart_and_start_chat, restart_chat, select_option, start_chat,
    submit_text,
};
use crate::adapters::http::AppState;

/// Creates the chat router.
///
/// Routes:
/// - `POST /api/chat/sessoes` - Open a chat
/// - `GET /api/chat/sessoes/:id` - Current view
/// - `DELETE /api/chat/sessoes/:id` - Abandon
/// - `POST /api/chat/sessoes/:id/iniciar` - (Re)start with fresh questions
/// - `POST /api/chat/sessoes/:id/respostas` - Submit typed text
/// - `POST /api/chat/sessoes/:id/selecoes` - Choose an option
/// - `POST /api/chat/sessoes/:id/reiniciar` - Restart
pub fn chat_router() -> Router<AppState> {
    Router::new()
        .route("/api/chat/sessoes", post(start_chat))
        .route("/api/chat/sessoes/:id", get(get_chat).delete(abandon_chat))
        .route("/api/chat/sessoes/:id/iniciar", post(restart_and_start_chat))
        .route("/api/chat/sessoes/:id/respostas", post(submit_text))
        .route("/api/chat/sessoes/:id/selecoes", post(select_option))
        .route("/api/chat/sessoes/:id/reiniciar", post(restart_chat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{body_json, empty_request, json_request, test_app, TestApp};
    use crate::adapters::recommendation::MockRecommendationService;
    use crate::application::CreateQuestionCommand;
    use crate::domain::catalog::QuestionKind;
    use crate::ports::RecommendationError;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app_with_questions(recommendations: MockRecommendationService) -> (Router, TestApp) {
        let test = test_app(recommendations);
        let create = test.state.create_question_handler();
        create
            .handle(CreateQuestionCommand {
                text: "Qual opção?".to_string(),
                kind: QuestionKind::MultipleChoice,
                order: 1,
                options: vec!["A".to_string(), "B".to_string()],
            })
            .await
            .unwrap();
        create
            .handle(CreateQuestionCommand {
                text: "Algo mais?".to_string(),
                kind: QuestionKind::FreeText,
                order: 2,
                options: vec![],
            })
            .await
            .unwrap();
        (chat_router().with_state(test.state.clone()), test)
    }

    async fn open(router: &Router) -> Value {
        let response = router
            .clone()
            .oneshot(empty_request("POST", "/api/chat/sessoes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    fn session_uri(body: &Value, suffix: &str) -> String {
        format!(
            "/api/chat/sessoes/{}{}",
            body["sessao"]["sessaoId"].as_str().unwrap(),
            suffix
        )
    }

    #[tokio::test]
    async fn full_consultation_calls_the_service_once_after_the_last_answer() {
        let service = MockRecommendationService::new().with_product(
            "Cafeteira",
            json!([{"pergunta": "Qual opção?", "resposta": "B", "importancia": "alta"}]),
        );
        let (router, test) = app_with_questions(service).await;

        let opened = open(&router).await;
        assert_eq!(opened["sessao"]["pergunta"]["perguntaId"], 1);

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/selecoes"),
                json!({"perguntaId": 1, "opcao": "B"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["sessao"]["pergunta"]["perguntaId"], 2);
        assert_eq!(test.recommendations.call_count(), 0);

        let response = router
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/respostas"),
                json!({"texto": "  hello "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["sessao"]["estado"], "done");
        assert_eq!(body["sessao"]["respostas"], json!({"1": "B", "2": "hello"}));
        assert_eq!(body["sessao"]["aceitaTexto"], false);
        assert_eq!(body["sessao"]["acoes"], json!(["reiniciar"]));
        assert!(body["sessao"]["html"].as_str().unwrap().contains("Determinante"));
        assert_eq!(test.recommendations.call_count(), 1);
    }

    #[tokio::test]
    async fn text_for_a_multiple_choice_question_asks_again() {
        let (router, _test) = app_with_questions(MockRecommendationService::new()).await;
        let opened = open(&router).await;

        let response = router
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/respostas"),
                json!({"texto": "talvez"}),
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["sessao"]["estado"], "clarifying");
        assert_eq!(body["sessao"]["pergunta"]["esclarecimento"], true);
        assert_eq!(body["sessao"]["respostas"], json!({}));
    }

    #[tokio::test]
    async fn invalid_answers_are_bad_requests() {
        let (router, _test) = app_with_questions(MockRecommendationService::new()).await;
        let opened = open(&router).await;

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/selecoes"),
                json!({"perguntaId": 1, "opcao": "Z"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/respostas"),
                json!({"texto": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = router
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/selecoes"),
                json!({"perguntaId": 2, "opcao": "A"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn service_failure_ends_with_the_fallback() {
        let service = MockRecommendationService::new()
            .with_error(RecommendationError::unavailable("connection refused"));
        let (router, _test) = app_with_questions(service).await;
        let opened = open(&router).await;

        router
            .clone()
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/selecoes"),
                json!({"perguntaId": 1, "opcao": "A"}),
            ))
            .await
            .unwrap();
        let response = router
            .oneshot(json_request(
                "POST",
                &session_uri(&opened, "/respostas"),
                json!({"texto": "nada"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["sessao"]["recomendacao"]["kind"], "fallback");
        assert!(body["sessao"]["html"]
            .as_str()
            .unwrap()
            .contains("Obrigado pela sua Consulta"));
    }

    #[tokio::test]
    async fn restart_then_abandon() {
        let (router, _test) = app_with_questions(MockRecommendationService::new()).await;
        let opened = open(&router).await;

        let response = router
            .clone()
            .oneshot(empty_request("POST", &session_uri(&opened, "/reiniciar")))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["sessao"]["estado"], "not_started");
        assert_eq!(body["sessao"]["historico"], json!([]));

        let response = router
            .clone()
            .oneshot(empty_request("POST", &session_uri(&opened, "/iniciar")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["sessao"]["estado"], "presenting");

        let response = router
            .clone()
            .oneshot(empty_request("DELETE", &session_uri(&opened, "")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(empty_request("GET", &session_uri(&opened, "")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn chat_without_questions_is_unavailable_and_retryable() {
        let test = test_app(MockRecommendationService::new());
        let router = chat_router().with_state(test.state.clone());

        let response = router
            .oneshot(empty_request("POST", "/api/chat/sessoes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["retry"], true);
    }
}
