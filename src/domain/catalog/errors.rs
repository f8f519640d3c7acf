//! Catalog-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ProductId, QuestionId, ValidationError};

/// Errors raised by question and product management.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Another question already uses the requested order.
    #[error("Order {order} is already used by question \"{existing_text}\"")]
    DuplicateOrder {
        order: u32,
        existing_id: QuestionId,
        existing_text: String,
    },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn storage(message: impl Into<String>) -> Self {
        CatalogError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            CatalogError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            CatalogError::DuplicateOrder { .. } => ErrorCode::DuplicateOrder,
            CatalogError::Validation(_) => ErrorCode::ValidationFailed,
            CatalogError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Storage(err.to_string())
    }
}
