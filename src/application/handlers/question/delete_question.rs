//! DeleteQuestionHandler - Command handler for removing a question.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Question};
use crate::domain::foundation::QuestionId;
use crate::ports::QuestionRepository;

#[derive(Debug, Clone)]
pub struct DeleteQuestionCommand {
    pub id: QuestionId,
}

pub struct DeleteQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl DeleteQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Returns the removed question.
    pub async fn handle(&self, cmd: DeleteQuestionCommand) -> Result<Question, CatalogError> {
        let removed = self.repository.delete(cmd.id).await?;
        tracing::info!(question_id = %cmd.id, "question deleted");
        Ok(removed)
    }
}
