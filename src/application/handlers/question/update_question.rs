//! UpdateQuestionHandler - Command handler for editing a question.

use std::sync::Arc;

use super::CreateQuestionCommand;
use crate::domain::catalog::{CatalogError, Question, QuestionKind};
use crate::domain::foundation::QuestionId;
use crate::ports::QuestionRepository;

/// Command to replace a question's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
    pub order: i64,
    pub options: Vec<String>,
}

pub struct UpdateQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl UpdateQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateQuestionCommand) -> Result<Question, CatalogError> {
        let id = cmd.id;
        let draft = CreateQuestionCommand {
            text: cmd.text,
            kind: cmd.kind,
            order: cmd.order,
            options: cmd.options,
        }
        .into_draft()
        .validate()?;

        let question = self.repository.update(id, draft).await?;
        tracing::info!(question_id = %id, order = question.order(), "question updated");
        Ok(question)
    }
}
