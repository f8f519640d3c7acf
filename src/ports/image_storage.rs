//! Image storage port for product pictures.

use async_trait::async_trait;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ValidationError;

/// Errors raised while storing an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageStorageError {
    #[error("image is empty")]
    Empty,

    #[error("image exceeds {max_bytes} bytes")]
    TooLarge { max_bytes: usize },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<ImageStorageError> for CatalogError {
    fn from(err: ImageStorageError) -> Self {
        match err {
            ImageStorageError::Io(message) => CatalogError::Storage(message),
            other => CatalogError::Validation(ValidationError::invalid_format("imagem", other.to_string())),
        }
    }
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores the bytes under a fresh name derived from `original_name`'s
    /// extension and returns the public reference (e.g. `/uploads/<file>`).
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, ImageStorageError>;
}
