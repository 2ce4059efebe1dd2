use super::RegistryStore;
use crate::error::StorageError;
use crate::models::Entry;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// In-process registry holding the same lines a [`FileStore`](super::FileStore)
/// would write. Clones share the same backing list.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with pre-existing lines, as if read from an old file.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn append_entry(&self, entry: &Entry) -> Result<(), StorageError> {
        let line = entry.to_line().trim_end_matches('\n').to_string();
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
        Ok(())
    }

    async fn read_all_lines(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
