//! Wire types for the question endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Question, QuestionKind};
use crate::domain::foundation::ValidationError;

/// Body of `POST /api/perguntas` and `PUT /api/perguntas/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub pergunta: String,
    #[serde(default)]
    pub tipo: String,
    /// Missing or non-positive values fail validation.
    #[serde(default)]
    pub ordem: i64,
    #[serde(default)]
    pub opcoes: Vec<String>,
}

impl QuestionRequest {
    pub fn kind(&self) -> Result<QuestionKind, ValidationError> {
        self.tipo.parse()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: u64,
    pub pergunta: String,
    pub tipo: &'static str,
    pub ordem: u32,
    pub opcoes: Vec<String>,
    pub data_cadastro: String,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            pergunta: question.text().to_string(),
            tipo: question.kind().wire_tag(),
            ordem: question.order(),
            opcoes: question.options().to_vec(),
            data_cadastro: question.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionListPayload {
    pub total: usize,
    pub perguntas: Vec<QuestionResponse>,
}

impl From<Vec<Question>> for QuestionListPayload {
    fn from(questions: Vec<Question>) -> Self {
        let perguntas: Vec<QuestionResponse> = questions.iter().map(Into::into).collect();
        Self {
            total: perguntas.len(),
            perguntas,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionPayload {
    pub pergunta: QuestionResponse,
}

impl From<&Question> for QuestionPayload {
    fn from(question: &Question) -> Self {
        Self {
            pergunta: question.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NextOrderPayload {
    pub ordem: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionDraft;
    use crate::domain::foundation::{QuestionId, Timestamp};
    use serde_json::json;

    #[test]
    fn request_deserializes_admin_form() {
        let req: QuestionRequest = serde_json::from_value(json!({
            "pergunta": "Qual o uso?",
            "tipo": "multipla-escolha",
            "ordem": 1,
            "opcoes": ["Casa", "Escritório"]
        }))
        .unwrap();
        assert_eq!(req.kind().unwrap(), QuestionKind::MultipleChoice);
        assert_eq!(req.ordem, 1);
        assert_eq!(req.opcoes.len(), 2);
    }

    #[test]
    fn request_with_unknown_kind_fails_validation() {
        let req: QuestionRequest =
            serde_json::from_value(json!({"pergunta": "x", "tipo": "escala", "ordem": 1}))
                .unwrap();
        assert!(req.kind().is_err());
    }

    #[test]
    fn response_uses_wire_names() {
        let draft = QuestionDraft {
            text: "Seu nome?".to_string(),
            kind: QuestionKind::FreeText,
            order: 3,
            options: vec![],
        }
        .validate()
        .unwrap();
        let question = Question::new(QuestionId::new(4), draft, Timestamp::now());

        let value = serde_json::to_value(QuestionResponse::from(&question)).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["pergunta"], "Seu nome?");
        assert_eq!(value["tipo"], "texto-livre");
        assert_eq!(value["ordem"], 3);
        assert_eq!(value["opcoes"], json!([]));
        assert!(value["dataCadastro"].is_string());
    }
}
