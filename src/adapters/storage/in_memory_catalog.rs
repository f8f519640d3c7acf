//! In-memory catalog repositories.
//!
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{
    insert_product, insert_question, remove_product, remove_question, update_product,
    update_question, CatalogError, Product, ProductUpdate, Question, ValidDraft,
};
use crate::domain::foundation::{ProductId, QuestionId, Timestamp};
use crate::ports::{NewProduct, ProductRepository, QuestionRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with existing questions.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    pub async fn count(&self) -> usize {
        self.questions.read().await.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, CatalogError> {
        Ok(self.questions.read().await.clone())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, CatalogError> {
        Ok(self.questions.read().await.iter().find(|q| q.id() == id).cloned())
    }

    async fn create(&self, draft: ValidDraft, created_at: Timestamp) -> Result<Question, CatalogError> {
        insert_question(&mut *self.questions.write().await, draft, created_at)
    }

    async fn update(&self, id: QuestionId, draft: ValidDraft) -> Result<Question, CatalogError> {
        update_question(&mut self.questions.write().await, id, draft)
    }

    async fn delete(&self, id: QuestionId) -> Result<Question, CatalogError> {
        remove_question(&mut *self.questions.write().await, id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.read().await.iter().find(|p| p.id() == id).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, CatalogError> {
        insert_product(
            &mut *self.products.write().await,
            &product.name,
            &product.description,
            product.image_ref,
            product.created_at,
        )
    }

    async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, CatalogError> {
        update_product(&mut self.products.write().await, id, update)
    }

    async fn delete(&self, id: ProductId) -> Result<Product, CatalogError> {
        remove_product(&mut *self.products.write().await, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{QuestionDraft, QuestionKind};

    fn draft(order: i64) -> ValidDraft {
        QuestionDraft {
            text: format!("Q{}", order),
            kind: QuestionKind::FreeText,
            order,
            options: vec![],
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_list() {
        let repo = InMemoryQuestionRepository::new();
        repo.create(draft(2), Timestamp::now()).await.unwrap();
        repo.create(draft(1), Timestamp::now()).await.unwrap();
        assert_eq!(repo.count().await, 2);
        assert_eq!(repo.list().await.unwrap()[0].order(), 2);
    }

    #[tokio::test]
    async fn update_rejects_an_order_taken_by_another_question() {
        let repo = InMemoryQuestionRepository::new();
        let first = repo.create(draft(1), Timestamp::now()).await.unwrap();
        repo.create(draft(2), Timestamp::now()).await.unwrap();

        let err = repo.update(first.id(), draft(2)).await.unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOrder { order: 2, .. }));
    }

    #[tokio::test]
    async fn product_delete_returns_the_removed_product() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(NewProduct {
                name: "Prensa".to_string(),
                description: String::new(),
                image_ref: None,
                created_at: Timestamp::now(),
            })
            .await
            .unwrap();

        let removed = repo.delete(created.id()).await.unwrap();
        assert_eq!(removed, created);
        assert!(repo.find_by_id(created.id()).await.unwrap().is_none());
    }
}
