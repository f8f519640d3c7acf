//! Flow-specific error types.

use thiserror::Error;

use super::FlowState;
use crate::domain::foundation::{DomainError, ErrorCode, FlowSessionId, QuestionId, ValidationError};

/// Errors raised by the question-flow controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Flow session not found: {0}")]
    NotFound(FlowSessionId),

    /// The question list is empty; the chat cannot begin.
    #[error("No questions are configured for the chat")]
    NoQuestions,

    /// The question store could not be read.
    #[error("Questions could not be loaded: {0}")]
    QuestionsUnavailable(String),

    #[error("Answer cannot be empty")]
    EmptyAnswer,

    #[error("'{option}' is not an option of question {question_id}")]
    InvalidOption { question_id: QuestionId, option: String },

    /// Selection targeted a question that is not the one being asked.
    #[error("Question {0} is not awaiting an answer")]
    QuestionNotActive(QuestionId),

    #[error("Question {0} is answered by typing, not by choosing an option")]
    KindMismatch(QuestionId),

    #[error("The chat is not accepting answers ({0})")]
    InputClosed(&'static str),

    #[error("The chat is not ready to be finalized ({0})")]
    NotFinalizing(&'static str),

    #[error("A recommendation request is already in flight")]
    RecommendationInFlight,

    #[error("{0}")]
    InvalidTransition(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FlowError {
    pub(crate) fn input_closed(state: FlowState) -> Self {
        FlowError::InputClosed(state.label())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::NotFound(_) => ErrorCode::FlowSessionNotFound,
            FlowError::NoQuestions | FlowError::QuestionsUnavailable(_) => ErrorCode::QuestionNotFound,
            FlowError::EmptyAnswer
            | FlowError::InvalidOption { .. }
            | FlowError::KindMismatch(_) => ErrorCode::ValidationFailed,
            FlowError::QuestionNotActive(_)
            | FlowError::InputClosed(_)
            | FlowError::NotFinalizing(_)
            | FlowError::RecommendationInFlight
            | FlowError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            FlowError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Whether a client should offer a retry action for this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FlowError::QuestionsUnavailable(_) | FlowError::NoQuestions | FlowError::Storage(_)
        )
    }
}

impl From<DomainError> for FlowError {
    fn from(err: DomainError) -> Self {
        FlowError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_load_failures_are_retryable() {
        assert!(FlowError::QuestionsUnavailable("io".to_string()).is_retryable());
        assert!(FlowError::NoQuestions.is_retryable());
        assert!(!FlowError::EmptyAnswer.is_retryable());
    }

    #[test]
    fn answer_problems_are_validation_failures() {
        let err = FlowError::InvalidOption {
            question_id: QuestionId::new(1),
            option: "C".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "'C' is not an option of question 1");
    }

    #[test]
    fn storage_failures_convert() {
        let err: FlowError = DomainError::storage("disk full").into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
