//! DeleteProductHandler - Command handler for removing a product.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Product};
use crate::domain::foundation::ProductId;
use crate::ports::ProductRepository;

#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}

pub struct DeleteProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Returns the removed product. Its image file is left in place.
    pub async fn handle(&self, cmd: DeleteProductCommand) -> Result<Product, CatalogError> {
        let removed = self.repository.delete(cmd.id).await?;
        tracing::info!(product_id = %cmd.id, "product deleted");
        Ok(removed)
    }
}
