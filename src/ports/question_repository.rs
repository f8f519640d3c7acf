//! Question repository port.
//!
//! Stores the questions of the recommendation chat. Implementations apply
//! every mutation against the full list under one lock so that id
//! assignment and order uniqueness hold.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogError, Question, ValidDraft};
use crate::domain::foundation::{QuestionId, Timestamp};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions in storage order.
    async fn list(&self) -> Result<Vec<Question>, CatalogError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, CatalogError>;

    /// Stores a new question with the next free id.
    ///
    /// # Errors
    ///
    /// - `DuplicateOrder` if another question uses the draft's order
    /// - `Storage` on persistence failure
    async fn create(&self, draft: ValidDraft, created_at: Timestamp) -> Result<Question, CatalogError>;

    /// Replaces the editable fields of an existing question.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if no question has `id`
    /// - `DuplicateOrder` if another question uses the draft's order
    async fn update(&self, id: QuestionId, draft: ValidDraft) -> Result<Question, CatalogError>;

    /// Removes a question and returns it.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if no question has `id`
    async fn delete(&self, id: QuestionId) -> Result<Question, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn QuestionRepository) {}
    }
}
