//! JSON Lines file holding one record per line.
//!
//! The whole file is read and rewritten per mutation. Writers are
//! serialised by a per-file mutex; there is no cross-process locking.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::DomainError;

#[derive(Debug, Clone)]
pub struct JsonLinesFile {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonLinesFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is an empty collection.
    ///
    /// Lines that fail to parse are skipped with a warning so one damaged
    /// record does not hide the rest.
    pub async fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, DomainError> {
        let (records, _) = self.read_records().await?;
        Ok(records)
    }

    /// Parsed records plus the 1-based numbers of lines that did not parse.
    async fn read_records<T: DeserializeOwned>(&self) -> Result<(Vec<T>, Vec<usize>), DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok((Vec::new(), Vec::new())),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let mut records = Vec::new();
        let mut unreadable = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        error = %e,
                        "skipping unreadable record"
                    );
                    unreadable.push(number + 1);
                }
            }
        }
        Ok((records, unreadable))
    }

    /// Loads the records, applies `f` and writes the result back if `f`
    /// succeeds. The file is left untouched when `f` fails.
    ///
    /// A file with unreadable lines is never rewritten, since that would
    /// drop them; the mutation fails with a storage error instead.
    pub async fn mutate<T, R, E, F>(&self, f: F) -> Result<R, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<DomainError>,
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
    {
        let _guard = self.write_lock.lock().await;
        let (mut records, unreadable) = self.read_records::<T>().await?;
        if !unreadable.is_empty() {
            tracing::error!(
                path = %self.path.display(),
                lines = ?unreadable,
                "refusing to rewrite a file with unreadable records"
            );
            return Err(DomainError::storage(format!(
                "{} has unreadable records at lines {:?}; repair it before changing the catalog",
                self.path.display(),
                unreadable
            ))
            .into());
        }
        let result = f(&mut records)?;
        self.write_all(&records).await?;
        Ok(result)
    }

    async fn write_all<T: Serialize>(&self, records: &[T]) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?;
        }

        let mut content = String::new();
        for record in records {
            let line = serde_json::to_string(record)
                .map_err(|e| DomainError::storage(format!("failed to serialize record: {}", e)))?;
            content.push_str(&line);
            content.push('\n');
        }

        // Write to a sibling file first so readers never see a partial list.
        let tmp = self.path.with_extension("jsonl.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| DomainError::storage(format!("failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| DomainError::storage(format!("failed to replace {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        name: String,
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let file = JsonLinesFile::new(dir.path().join("rows.jsonl"));
        let rows: Vec<Row> = file.read_all().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn mutate_persists_one_record_per_line() {
        let dir = TempDir::new().unwrap();
        let file = JsonLinesFile::new(dir.path().join("nested/rows.jsonl"));

        file.mutate(|rows: &mut Vec<Row>| {
            rows.push(Row { id: 1, name: "a".into() });
            rows.push(Row { id: 2, name: "b|c".into() });
            Ok::<_, DomainError>(())
        })
        .await
        .unwrap();

        let raw = tokio::fs::read_to_string(file.path()).await.unwrap();
        assert_eq!(raw.lines().count(), 2);
        let rows: Vec<Row> = file.read_all().await.unwrap();
        assert_eq!(rows[1].name, "b|c");
    }

    #[tokio::test]
    async fn failed_mutation_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let file = JsonLinesFile::new(dir.path().join("rows.jsonl"));
        file.mutate(|rows: &mut Vec<Row>| {
            rows.push(Row { id: 1, name: "a".into() });
            Ok::<_, DomainError>(())
        })
        .await
        .unwrap();

        let result = file
            .mutate(|rows: &mut Vec<Row>| {
                rows.clear();
                Err::<(), _>(DomainError::storage("nope"))
            })
            .await;
        assert!(result.is_err());

        let rows: Vec<Row> = file.read_all().await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn unreadable_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.jsonl");
        tokio::fs::write(&path, "{\"id\":1,\"name\":\"a\"}\nnot json\n\n{\"id\":2,\"name\":\"b\"}\n")
            .await
            .unwrap();

        let rows: Vec<Row> = JsonLinesFile::new(&path).read_all().await.unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn mutation_never_drops_unreadable_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.jsonl");
        let raw = "{\"id\":1,\"name\":\"a\"}\nnot json\n";
        tokio::fs::write(&path, raw).await.unwrap();

        let file = JsonLinesFile::new(&path);
        let result = file
            .mutate(|rows: &mut Vec<Row>| {
                rows.push(Row { id: 2, name: "b".into() });
                Ok::<_, DomainError>(())
            })
            .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("[2]"));
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), raw);
    }
}
