//! Question query handlers.

use std::sync::Arc;

use crate::domain::catalog::{next_free_order, sort_by_order, CatalogError, Question};
use crate::domain::foundation::QuestionId;
use crate::ports::QuestionRepository;

/// Lists questions in presentation order.
pub struct ListQuestionsHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl ListQuestionsHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Question>, CatalogError> {
        let mut questions = self.repository.list().await?;
        sort_by_order(&mut questions);
        Ok(questions)
    }
}

#[derive(Debug, Clone)]
pub struct GetQuestionQuery {
    pub id: QuestionId,
}

pub struct GetQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl GetQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetQuestionQuery) -> Result<Question, CatalogError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(CatalogError::QuestionNotFound(query.id))
    }
}

/// Suggests the first unused order, counting from 1.
pub struct NextOrderHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl NextOrderHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<u32, CatalogError> {
        let questions = self.repository.list().await?;
        Ok(next_free_order(&questions))
    }
}
