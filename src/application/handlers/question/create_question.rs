//! CreateQuestionHandler - Command handler for registering chat questions.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Question, QuestionDraft, QuestionKind};
use crate::domain::foundation::Timestamp;
use crate::ports::QuestionRepository;

/// Command to create a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    pub text: String,
    pub kind: QuestionKind,
    pub order: i64,
    pub options: Vec<String>,
}

impl CreateQuestionCommand {
    pub(crate) fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            text: self.text,
            kind: self.kind,
            order: self.order,
            options: self.options,
        }
    }
}

pub struct CreateQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl CreateQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateQuestionCommand) -> Result<Question, CatalogError> {
        let draft = cmd.into_draft().validate()?;
        let question = self.repository.create(draft, Timestamp::now()).await?;

        tracing::info!(
            question_id = %question.id(),
            order = question.order(),
            kind = question.kind().wire_tag(),
            "question created"
        );
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryQuestionRepository;

    fn command(text: &str, order: i64) -> CreateQuestionCommand {
        CreateQuestionCommand {
            text: text.to_string(),
            kind: QuestionKind::MultipleChoice,
            order,
            options: vec!["A".to_string(), "B".to_string()],
        }
    }

    #[tokio::test]
    async fn creates_with_first_id() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let handler = CreateQuestionHandler::new(repo.clone());

        let question = handler.handle(command("Uso?", 1)).await.unwrap();
        assert_eq!(question.id().value(), 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_order_names_the_conflicting_question() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let handler = CreateQuestionHandler::new(repo.clone());
        handler.handle(command("Qual o orçamento?", 2)).await.unwrap();

        let err = handler.handle(command("Outra", 2)).await.unwrap_err();
        assert!(err.to_string().contains("Qual o orçamento?"));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_storage() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let handler = CreateQuestionHandler::new(repo.clone());

        let mut cmd = command("Sem opções", 1);
        cmd.options = vec!["  ".to_string()];
        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(repo.count().await, 0);
    }
}
