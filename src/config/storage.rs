//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

const MAX_UPLOAD_LIMIT: usize = 50 * 1024 * 1024;

/// Where catalog files and uploaded images live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the question and product files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding uploaded product images
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Largest accepted image upload, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Chat sessions untouched for this long are dropped
    #[serde(default = "default_session_idle_ttl")]
    pub session_idle_ttl_secs: u64,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DATA_DIR"));
        }
        if self.uploads_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__UPLOADS_DIR"));
        }
        if self.max_upload_bytes == 0 || self.max_upload_bytes > MAX_UPLOAD_LIMIT {
            return Err(ValidationError::InvalidUploadLimit);
        }
        if self.session_idle_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }

    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// How often idle sessions are looked for; never longer than a minute.
    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs.clamp(1, 60))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            uploads_dir: default_uploads_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            session_idle_ttl_secs: default_session_idle_ttl(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_session_idle_ttl() -> u64 {
    60 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_upload_limit_bounds() {
        let config = StorageConfig {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUploadLimit));

        let config = StorageConfig {
            max_upload_bytes: MAX_UPLOAD_LIMIT + 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUploadLimit));
    }

    #[test]
    fn test_session_ttl() {
        let config = StorageConfig::default();
        assert_eq!(config.session_idle_ttl(), Duration::from_secs(3600));
        assert_eq!(config.session_sweep_interval(), Duration::from_secs(60));

        let config = StorageConfig {
            session_idle_ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionTtl));
    }
}
