//! Chat question entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{QuestionId, Timestamp, ValidationError};

/// Maximum length for question text.
pub const MAX_TEXT_LENGTH: usize = 1000;

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// The user picks exactly one of the configured options.
    MultipleChoice,
    /// The user types any non-empty answer.
    FreeText,
}

impl QuestionKind {
    /// Tag used by the admin front end (`multipla-escolha` / `texto-livre`).
    pub fn wire_tag(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multipla-escolha",
            Self::FreeText => "texto-livre",
        }
    }

    /// Human-readable label, as printed in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "Múltipla Escolha",
            Self::FreeText => "Texto Livre",
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

impl FromStr for QuestionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "multipla-escolha" | "multiple_choice" => Ok(Self::MultipleChoice),
            "texto-livre" | "free_text" => Ok(Self::FreeText),
            other => Err(ValidationError::invalid_format(
                "tipo",
                format!("unknown question kind '{}'", other),
            )),
        }
    }
}

/// Unvalidated question fields as submitted by an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub kind: QuestionKind,
    pub order: i64,
    pub options: Vec<String>,
}

impl QuestionDraft {
    /// Validates and normalises the draft.
    ///
    /// Text is trimmed, blank options are dropped, options are discarded for
    /// free-text questions and required for multiple-choice ones.
    pub fn validate(self) -> Result<ValidDraft, ValidationError> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::empty_field("pergunta"));
        }
        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(ValidationError::invalid_format(
                "pergunta",
                format!("must be at most {} characters", MAX_TEXT_LENGTH),
            ));
        }

        if self.order < 1 || self.order > i64::from(u32::MAX) {
            return Err(ValidationError::out_of_range(
                "ordem",
                1,
                i64::from(u32::MAX),
                self.order,
            ));
        }

        let options = match self.kind {
            QuestionKind::FreeText => Vec::new(),
            QuestionKind::MultipleChoice => {
                let options: Vec<String> = self
                    .options
                    .into_iter()
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect();
                if options.is_empty() {
                    return Err(ValidationError::empty_field("opcoes"));
                }
                options
            }
        };

        Ok(ValidDraft {
            text,
            kind: self.kind,
            order: self.order as u32,
            options,
        })
    }
}

/// A draft that passed validation; the only way to build or edit a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    text: String,
    kind: QuestionKind,
    order: u32,
    options: Vec<String>,
}

impl ValidDraft {
    pub fn order(&self) -> u32 {
        self.order
    }
}

/// A question of the recommendation chat.
///
/// # Invariants
///
/// - `text` is non-empty
/// - `order >= 1`
/// - `options` is non-empty iff `kind` is multiple-choice
///
/// Order uniqueness across questions is enforced by the store, see
/// [`super::find_order_conflict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    kind: QuestionKind,
    order: u32,
    #[serde(default)]
    options: Vec<String>,
    created_at: Timestamp,
}

impl Question {
    /// Creates a question from a validated draft.
    pub fn new(id: QuestionId, draft: ValidDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            text: draft.text,
            kind: draft.kind,
            order: draft.order,
            options: draft.options,
            created_at,
        }
    }

    /// Replaces every editable field, keeping id and creation time.
    pub fn apply(&mut self, draft: ValidDraft) {
        self.text = draft.text;
        self.kind = draft.kind;
        self.order = draft.order;
        self.options = draft.options;
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if `candidate` is exactly one of the configured options.
    pub fn has_option(&self, candidate: &str) -> bool {
        self.options.iter().any(|o| o == candidate)
    }
}
