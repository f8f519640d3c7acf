//! UpdateProductHandler - Command handler for editing a product.

use std::sync::Arc;

use super::ImageUpload;
use crate::domain::catalog::{CatalogError, Product, ProductUpdate};
use crate::domain::foundation::ProductId;
use crate::ports::{ImageStorage, ProductRepository};

/// Blank or absent fields keep their current value.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

pub struct UpdateProductHandler {
    repository: Arc<dyn ProductRepository>,
    images: Arc<dyn ImageStorage>,
}

impl UpdateProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>, images: Arc<dyn ImageStorage>) -> Self {
        Self { repository, images }
    }

    pub async fn handle(&self, cmd: UpdateProductCommand) -> Result<Product, CatalogError> {
        if self.repository.find_by_id(cmd.id).await?.is_none() {
            return Err(CatalogError::ProductNotFound(cmd.id));
        }

        let image_ref = match cmd.image {
            Some(upload) => Some(self.images.store(&upload.file_name, &upload.bytes).await?),
            None => None,
        };

        let product = self
            .repository
            .update(
                cmd.id,
                ProductUpdate {
                    name: cmd.name,
                    description: cmd.description,
                    image_ref,
                },
            )
            .await?;

        tracing::info!(product_id = %cmd.id, "product updated");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryProductRepository, LocalImageStorage};
    use crate::domain::foundation::Timestamp;
    use crate::ports::NewProduct;
    use tempfile::TempDir;

    async fn setup(dir: &TempDir) -> (UpdateProductHandler, Product) {
        let repo = Arc::new(InMemoryProductRepository::new());
        let product = repo
            .create(NewProduct {
                name: "Prensa".to_string(),
                description: "Original".to_string(),
                image_ref: Some("/uploads/old.png".to_string()),
                created_at: Timestamp::now(),
            })
            .await
            .unwrap();
        let images = Arc::new(LocalImageStorage::new(dir.path(), 1024));
        (UpdateProductHandler::new(repo, images), product)
    }

    #[tokio::test]
    async fn blank_fields_keep_previous_values() {
        let dir = TempDir::new().unwrap();
        let (handler, product) = setup(&dir).await;

        let updated = handler
            .handle(UpdateProductCommand {
                id: product.id(),
                name: Some(String::new()),
                description: Some("   ".to_string()),
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "Prensa");
        assert_eq!(updated.description(), "Original");
        assert_eq!(updated.image_ref(), Some("/uploads/old.png"));
    }

    #[tokio::test]
    async fn new_image_replaces_the_reference() {
        let dir = TempDir::new().unwrap();
        let (handler, product) = setup(&dir).await;

        let updated = handler
            .handle(UpdateProductCommand {
                id: product.id(),
                name: Some("Prensa 2".to_string()),
                description: None,
                image: Some(ImageUpload {
                    file_name: "nova.png".to_string(),
                    bytes: vec![7],
                }),
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "Prensa 2");
        assert_ne!(updated.image_ref(), Some("/uploads/old.png"));
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (handler, _) = setup(&dir).await;
        let err = handler
            .handle(UpdateProductCommand {
                id: ProductId::new(99),
                name: None,
                description: None,
                image: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound(ProductId::new(99)));
    }
}
