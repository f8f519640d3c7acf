//! File-backed catalog repositories.
//!
//! Questions and products each live in their own JSON Lines file under the
//! data directory.

use async_trait::async_trait;
use std::path::Path;

use super::JsonLinesFile;
use crate::domain::catalog::{
    insert_product, insert_question, remove_product, remove_question, update_product,
    update_question, CatalogError, Product, ProductUpdate, Question, ValidDraft,
};
use crate::domain::foundation::{ProductId, QuestionId, Timestamp};
use crate::ports::{NewProduct, ProductRepository, QuestionRepository};

pub const QUESTIONS_FILE: &str = "perguntas.jsonl";
pub const PRODUCTS_FILE: &str = "produtos.jsonl";

#[derive(Debug, Clone)]
pub struct FileQuestionRepository {
    file: JsonLinesFile,
}

impl FileQuestionRepository {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            file: JsonLinesFile::new(data_dir.as_ref().join(QUESTIONS_FILE)),
        }
    }
}

#[async_trait]
impl QuestionRepository for FileQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, CatalogError> {
        Ok(self.file.read_all().await?)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, CatalogError> {
        let questions: Vec<Question> = self.file.read_all().await?;
        Ok(questions.into_iter().find(|q| q.id() == id))
    }

    async fn create(&self, draft: ValidDraft, created_at: Timestamp) -> Result<Question, CatalogError> {
        self.file
            .mutate(|questions: &mut Vec<Question>| insert_question(questions, draft, created_at))
            .await
    }

    async fn update(&self, id: QuestionId, draft: ValidDraft) -> Result<Question, CatalogError> {
        self.file
            .mutate(|questions: &mut Vec<Question>| update_question(questions, id, draft))
            .await
    }

    async fn delete(&self, id: QuestionId) -> Result<Question, CatalogError> {
        self.file
            .mutate(|questions: &mut Vec<Question>| remove_question(questions, id))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct FileProductRepository {
    file: JsonLinesFile,
}

impl FileProductRepository {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            file: JsonLinesFile::new(data_dir.as_ref().join(PRODUCTS_FILE)),
        }
    }
}

#[async_trait]
impl ProductRepository for FileProductRepository {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.file.read_all().await?)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let products: Vec<Product> = self.file.read_all().await?;
        Ok(products.into_iter().find(|p| p.id() == id))
    }

    async fn create(&self, product: NewProduct) -> Result<Product, CatalogError> {
        self.file
            .mutate(|products: &mut Vec<Product>| {
                insert_product(
                    products,
                    &product.name,
                    &product.description,
                    product.image_ref,
                    product.created_at,
                )
            })
            .await
    }

    async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, CatalogError> {
        self.file
            .mutate(|products: &mut Vec<Product>| update_product(products, id, update))
            .await
    }

    async fn delete(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.file
            .mutate(|products: &mut Vec<Product>| remove_product(products, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{QuestionDraft, QuestionKind};
    use tempfile::TempDir;

    fn draft(text: &str, order: i64) -> ValidDraft {
        QuestionDraft {
            text: text.to_string(),
            kind: QuestionKind::MultipleChoice,
            order,
            options: vec!["Sim".to_string(), "Não".to_string()],
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn questions_survive_a_new_repository_instance() {
        let dir = TempDir::new().unwrap();
        let repo = FileQuestionRepository::new(dir.path());
        let created = repo.create(draft("Uso | industrial?", 1), Timestamp::now()).await.unwrap();

        let reopened = FileQuestionRepository::new(dir.path());
        let found = reopened.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn duplicate_order_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let repo = FileQuestionRepository::new(dir.path());
        repo.create(draft("Primeira", 1), Timestamp::now()).await.unwrap();

        let err = repo.create(draft("Segunda", 1), Timestamp::now()).await.unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOrder { .. }));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_question_is_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = FileQuestionRepository::new(dir.path());
        let err = repo.delete(QuestionId::new(3)).await.unwrap_err();
        assert_eq!(err, CatalogError::QuestionNotFound(QuestionId::new(3)));
    }

    #[tokio::test]
    async fn product_ids_are_max_plus_one() {
        let dir = TempDir::new().unwrap();
        let repo = FileProductRepository::new(dir.path());
        let new = |name: &str| NewProduct {
            name: name.to_string(),
            description: String::new(),
            image_ref: None,
            created_at: Timestamp::now(),
        };

        let a = repo.create(new("A")).await.unwrap();
        let b = repo.create(new("B")).await.unwrap();
        repo.delete(a.id()).await.unwrap();
        let c = repo.create(new("C")).await.unwrap();

        assert_eq!(b.id(), ProductId::new(2));
        assert_eq!(c.id(), ProductId::new(3));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let dir = TempDir::new().unwrap();
        let repo = FileProductRepository::new(dir.path());

        let mut handles = Vec::new();
        for i in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(NewProduct {
                    name: format!("P{}", i),
                    description: String::new(),
                    image_ref: None,
                    created_at: Timestamp::now(),
                })
                .await
                .unwrap()
                .id()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
