//! Product repository port.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogError, Product, ProductUpdate};
use crate::domain::foundation::{ProductId, Timestamp};

/// Fields of a product about to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image_ref: Option<String>,
    pub created_at: Timestamp,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in creation order.
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Stores a new product with the next free id.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank
    async fn create(&self, product: NewProduct) -> Result<Product, CatalogError>;

    /// Applies a partial update; blank fields keep their value.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no product has `id`
    async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, CatalogError>;

    /// Removes a product and returns it.
    async fn delete(&self, id: ProductId) -> Result<Product, CatalogError>;
}
