//! Wire types for the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::render::{render_explanation, render_prompt};
use crate::domain::flow::{AnswerSet, FlowSession, QuestionPrompt, TranscriptEntry, CLARIFICATION_TEXT};
use crate::domain::foundation::QuestionId;
use crate::domain::recommendation::{Explanation, FinalAction};

/// Body of `POST /api/chat/sessoes/:id/respostas`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextAnswerRequest {
    #[serde(default)]
    pub texto: String,
}

/// Body of `POST /api/chat/sessoes/:id/selecoes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub pergunta_id: u64,
    pub opcao: String,
}

impl SelectionRequest {
    pub fn question_id(&self) -> QuestionId {
        QuestionId::new(self.pergunta_id)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptView {
    pub pergunta_id: u64,
    pub texto: String,
    pub tipo: &'static str,
    pub opcoes: Vec<String>,
    pub posicao: usize,
    pub total: usize,
    pub esclarecimento: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<&'static str>,
}

impl From<&QuestionPrompt> for PromptView {
    fn from(prompt: &QuestionPrompt) -> Self {
        Self {
            pergunta_id: prompt.question_id.value(),
            texto: prompt.text.clone(),
            tipo: prompt.kind.wire_tag(),
            opcoes: prompt.options.clone(),
            posicao: prompt.position,
            total: prompt.total,
            esclarecimento: prompt.clarifying,
            mensagem: prompt.clarifying.then_some(CLARIFICATION_TEXT),
        }
    }
}

/// Everything the chat window needs to draw a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionView {
    pub sessao_id: String,
    pub estado: &'static str,
    pub geracao: u64,
    pub respondidas: usize,
    pub total: usize,
    pub aceita_texto: bool,
    pub concluida: bool,
    pub aguardando_recomendacao: bool,
    pub pergunta: Option<PromptView>,
    pub respostas: AnswerSet,
    pub historico: Vec<TranscriptEntry>,
    pub recomendacao: Option<Explanation>,
    pub acoes: Vec<&'static str>,
    /// Fragment for the latest bot message: the active question or the
    /// final recommendation.
    pub html: String,
}

impl From<&FlowSession> for ChatSessionView {
    fn from(session: &FlowSession) -> Self {
        let prompt = session.current_prompt();
        let explanation = session.explanation();

        let html = match (explanation, &prompt) {
            (Some(explanation), _) => render_explanation(explanation),
            (None, Some(prompt)) => render_prompt(prompt),
            (None, None) => String::new(),
        };
        let acoes = explanation
            .map(|e| e.actions().iter().map(action_name).collect())
            .unwrap_or_default();

        Self {
            sessao_id: session.id().to_string(),
            estado: session.state().label(),
            geracao: session.generation(),
            respondidas: session.answers().len(),
            total: session.questions().len(),
            aceita_texto: session.accepts_text_input(),
            concluida: session.is_complete(),
            aguardando_recomendacao: session.is_recommendation_pending(),
            pergunta: prompt.as_ref().map(PromptView::from),
            respostas: session.answers().clone(),
            historico: session.transcript().to_vec(),
            recomendacao: explanation.cloned(),
            acoes,
            html,
        }
    }
}

fn action_name(action: &FinalAction) -> &'static str {
    match action {
        FinalAction::Restart => "reiniciar",
    }
}

#[derive(Debug, Serialize)]
pub struct ChatPayload {
    pub sessao: ChatSessionView,
}

impl From<&FlowSession> for ChatPayload {
    fn from(session: &FlowSession) -> Self {
        Self {
            sessao: session.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbandonPayload {
    pub sessao_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Question, QuestionDraft, QuestionKind};
    use crate::domain::foundation::{FlowSessionId, Timestamp};
    use serde_json::json;

    fn question(id: u64, order: i64, kind: QuestionKind, options: &[&str]) -> Question {
        let draft = QuestionDraft {
            text: format!("Pergunta {}", id),
            kind,
            order,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
        .validate()
        .unwrap();
        Question::new(QuestionId::new(id), draft, Timestamp::now())
    }

    #[test]
    fn selection_request_reads_camel_case() {
        let req: SelectionRequest =
            serde_json::from_value(json!({"perguntaId": 3, "opcao": "B"})).unwrap();
        assert_eq!(req.question_id(), QuestionId::new(3));
        assert_eq!(req.opcao, "B");
    }

    #[test]
    fn view_of_a_fresh_session_has_no_prompt() {
        let session = FlowSession::new(FlowSessionId::new());
        let view = ChatSessionView::from(&session);
        assert_eq!(view.estado, "not_started");
        assert!(view.pergunta.is_none());
        assert!(view.html.is_empty());
        assert!(!view.aceita_texto);
    }

    #[test]
    fn view_of_a_started_session_renders_the_question() {
        let mut session = FlowSession::new(FlowSessionId::new());
        session
            .start(vec![question(1, 1, QuestionKind::MultipleChoice, &["A", "B"])])
            .unwrap();

        let view = ChatSessionView::from(&session);
        let prompt = view.pergunta.as_ref().unwrap();
        assert_eq!(prompt.pergunta_id, 1);
        assert_eq!(prompt.tipo, "multipla-escolha");
        assert_eq!(prompt.posicao, 1);
        assert!(prompt.mensagem.is_none());
        assert!(view.html.contains("data-opcao=\"B\""));
        assert!(view.aceita_texto);
        assert!(view.acoes.is_empty());
    }

    #[test]
    fn clarification_carries_the_notice() {
        let mut session = FlowSession::new(FlowSessionId::new());
        session
            .start(vec![question(1, 1, QuestionKind::MultipleChoice, &["A", "B"])])
            .unwrap();
        session.submit_text("talvez").unwrap();

        let view = ChatSessionView::from(&session);
        let prompt = view.pergunta.unwrap();
        assert!(prompt.esclarecimento);
        assert_eq!(prompt.mensagem, Some(CLARIFICATION_TEXT));
        assert_eq!(view.estado, "clarifying");
        assert!(view.respostas.is_empty());
    }
}
