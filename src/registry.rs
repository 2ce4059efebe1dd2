use crate::error::RegistryError;
use crate::models::{Entry, HealthResponse};
use crate::storage::RegistryStore;
use crate::validation::{extract::extract_email, syntax::is_plausible_email};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// # Email Registry Service
///
/// Validates submissions, rejects case-insensitive duplicates and appends
/// accepted addresses to the injected [`RegistryStore`]. Nothing is cached:
/// every call re-reads the store.
///
/// The duplicate scan and the append of one `submit` run under a single
/// writer lock, so two concurrent submissions of the same address served by
/// this instance cannot both be stored. Other processes writing the same
/// store are not coordinated with.
pub struct EmailRegistry {
    store: Arc<dyn RegistryStore>,
    writer: Mutex<()>,
}

impl EmailRegistry {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    /// Registers `email` if it contains `@` and is not already stored.
    ///
    /// Surrounding whitespace is stripped before checking and storing, the
    /// same way [`extract_email`] reads stored lines back. On success exactly
    /// one line has been appended; every error path leaves the store untouched.
    #[instrument(skip_all, fields(email = email.unwrap_or_default()))]
    pub async fn submit(&self, email: Option<&str>) -> Result<Entry, RegistryError> {
        let email = email
            .map(str::trim)
            .filter(|email| is_plausible_email(email))
            .ok_or_else(|| {
                debug!("rejected malformed email");
                RegistryError::InvalidEmail
            })?;

        let _guard = self.writer.lock().await;

        let lines = self
            .store
            .read_all_lines()
            .await
            .map_err(RegistryError::StorageScan)?;

        if is_registered(&lines, email) {
            info!("email already registered");
            return Err(RegistryError::AlreadyRegistered);
        }

        let entry = Entry::new(email);
        self.store
            .append_entry(&entry)
            .await
            .map_err(RegistryError::StorageWrite)?;

        info!(registered_at = %entry.timestamp(), "email registered");
        Ok(entry)
    }

    /// Raw registry content, one `\n`-terminated line per stored line. An
    /// empty registry yields an empty string.
    pub async fn list_all(&self) -> Result<String, RegistryError> {
        let lines = self
            .store
            .read_all_lines()
            .await
            .map_err(RegistryError::StorageRead)?;

        Ok(lines.iter().map(|line| format!("{line}\n")).collect())
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse::ok()
    }
}

/// Case-insensitive match of `email` against every extractable line.
fn is_registered(lines: &[String], email: &str) -> bool {
    let candidate = email.to_lowercase();
    lines
        .iter()
        .filter_map(|line| extract_email(line))
        .any(|existing| existing.to_lowercase() == candidate)
}
