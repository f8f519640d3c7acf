//! CreateProductHandler - Command handler for registering products.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Product};
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::ports::{ImageStorage, NewProduct, ProductRepository};

/// An uploaded picture as received from the form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Command to register a product.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

pub struct CreateProductHandler {
    repository: Arc<dyn ProductRepository>,
    images: Arc<dyn ImageStorage>,
}

impl CreateProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>, images: Arc<dyn ImageStorage>) -> Self {
        Self { repository, images }
    }

    pub async fn handle(&self, cmd: CreateProductCommand) -> Result<Product, CatalogError> {
        // No file is stored for a rejected form.
        if cmd.name.trim().is_empty() {
            return Err(ValidationError::empty_field("nome").into());
        }

        let image_ref = match cmd.image {
            Some(upload) => Some(self.images.store(&upload.file_name, &upload.bytes).await?),
            None => None,
        };

        let product = self
            .repository
            .create(NewProduct {
                name: cmd.name,
                description: cmd.description,
                image_ref,
                created_at: Timestamp::now(),
            })
            .await?;

        tracing::info!(
            product_id = %product.id(),
            has_image = product.image_ref().is_some(),
            "product created"
        );
        Ok(product)
    }
}
