use super::RegistryStore;
use crate::error::StorageError;
use crate::models::Entry;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Flat-file registry: UTF-8, one `"<timestamp> - <email>"` line per entry,
/// only ever appended to. The file is created by the first append.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RegistryStore for FileStore {
    async fn append_entry(&self, entry: &Entry) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(entry.to_line().as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "appended registry entry");
        Ok(())
    }

    async fn read_all_lines(&self) -> Result<Vec<String>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "registry file absent");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let content = String::from_utf8(bytes).map_err(|_| StorageError::Encoding)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
