//! Product images stored in a local directory and served under `/uploads`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::ports::{ImageStorage, ImageStorageError};

/// URL prefix the uploads directory is served from.
pub const UPLOADS_ROUTE: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    dir: PathBuf,
    max_bytes: usize,
}

impl LocalImageStorage {
    pub fn new<P: AsRef<Path>>(dir: P, max_bytes: usize) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// `<millis>-<uuid>.<ext>`; the extension is kept only when it is short
/// and alphanumeric.
fn stored_name(original_name: &str) -> String {
    let stem = format!("{}-{}", Timestamp::now().as_unix_millis(), Uuid::new_v4().simple());
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()));
    match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, ImageStorageError> {
        if bytes.is_empty() {
            return Err(ImageStorageError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(ImageStorageError::TooLarge {
                max_bytes: self.max_bytes,
            });
        }

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;

        let name = stored_name(original_name);
        fs::write(self.dir.join(&name), bytes)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;

        tracing::debug!(file = %name, size = bytes.len(), "stored product image");
        Ok(format!("{}/{}", UPLOADS_ROUTE, name))
    }
}
