//! Product query handlers.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Product};
use crate::domain::foundation::ProductId;
use crate::ports::ProductRepository;

/// How many products the "recent" list shows by default.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

pub struct ListProductsHandler {
    repository: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Product>, CatalogError> {
        self.repository.list().await
    }
}

#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub id: ProductId,
}

pub struct GetProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<Product, CatalogError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(CatalogError::ProductNotFound(query.id))
    }
}

#[derive(Debug, Clone)]
pub struct RecentProductsQuery {
    pub limit: usize,
}

impl Default for RecentProductsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Last created products, newest first.
pub struct RecentProductsHandler {
    repository: Arc<dyn ProductRepository>,
}

impl RecentProductsHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: RecentProductsQuery) -> Result<Vec<Product>, CatalogError> {
        let products = self.repository.list().await?;
        Ok(products.into_iter().rev().take(query.limit).collect())
    }
}
