//! Report query handlers.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::Timestamp;
use crate::domain::report::{product_report, question_report, TextReport};
use crate::ports::{ProductRepository, QuestionRepository};

pub struct QuestionReportHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionReportHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<TextReport, CatalogError> {
        let questions = self.repository.list().await?;
        Ok(question_report(&questions, Timestamp::now()))
    }
}

pub struct ProductReportHandler {
    repository: Arc<dyn ProductRepository>,
}

impl ProductReportHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<TextReport, CatalogError> {
        let products = self.repository.list().await?;
        Ok(product_report(&products, Timestamp::now()))
    }
}
