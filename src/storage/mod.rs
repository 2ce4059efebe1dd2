use crate::error::StorageError;
use crate::models::Entry;
use async_trait::async_trait;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// # Registry Storage Collaborator
///
/// Durable home of the registry, injected into
/// [`EmailRegistry`](crate::registry::EmailRegistry). Implementations only
/// move lines; uniqueness is enforced by the service above them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Appends one entry as a single line.
    async fn append_entry(&self, entry: &Entry) -> Result<(), StorageError>;

    /// Every stored line in append order, without line terminators. A registry
    /// that has never been written to yields an empty list.
    async fn read_all_lines(&self) -> Result<Vec<String>, StorageError>;
}
