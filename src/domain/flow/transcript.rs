//! Conversation transcript entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// Text shown when free text arrives for a multiple-choice question.
pub const CLARIFICATION_TEXT: &str = "Por favor, escolha uma das opções abaixo. \
     Esta pergunta requer que você selecione uma das alternativas disponíveis.";

/// One line of the chat as the user saw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// The bot asked a question.
    Question {
        question_id: QuestionId,
        text: String,
        options: Vec<String>,
    },
    /// The bot asked the user to pick one of the options instead.
    Clarification {
        question_id: QuestionId,
        text: String,
        options: Vec<String>,
    },
    /// Something the user sent. `committed` is false when it was displayed
    /// but not accepted as the answer.
    Reply {
        question_id: QuestionId,
        text: String,
        committed: bool,
    },
}

impl TranscriptEntry {
    pub fn question_id(&self) -> QuestionId {
        match self {
            Self::Question { question_id, .. }
            | Self::Clarification { question_id, .. }
            | Self::Reply { question_id, .. } => *question_id,
        }
    }

    pub fn is_from_user(&self) -> bool {
        matches!(self, Self::Reply { .. })
    }
}
