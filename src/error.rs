use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Failure raised by a [`RegistryStore`](crate::storage::RegistryStore) implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry content is not valid UTF-8")]
    Encoding,
}

/// # Registry Errors
///
/// Every failure `submit` and `list_all` can produce. Each variant maps to a
/// fixed HTTP status and a fixed public message; the wrapped storage error is
/// only ever logged.
///
/// | Variant | Status | Body |
/// |---|---|---|
/// | `InvalidEmail` | 400 | `{"error": "invalid email"}` |
/// | `AlreadyRegistered` | 409 | `{"error": "already registered"}` |
/// | `StorageScan`, `StorageWrite` | 500 | `{"error": "registration failed"}` |
/// | `StorageRead` | 500 | `{"error": "read failed"}` |
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid email")]
    InvalidEmail,

    #[error("email already registered")]
    AlreadyRegistered,

    /// The duplicate scan could not read the registry.
    #[error("failed to scan registry: {0}")]
    StorageScan(#[source] StorageError),

    #[error("failed to append entry: {0}")]
    StorageWrite(#[source] StorageError),

    #[error("failed to read registry: {0}")]
    StorageRead(#[source] StorageError),
}

impl RegistryError {
    /// Message returned to the caller in the `error` field.
    pub fn public_message(&self) -> &'static str {
        match self {
            RegistryError::InvalidEmail => "invalid email",
            RegistryError::AlreadyRegistered => "already registered",
            RegistryError::StorageScan(_) | RegistryError::StorageWrite(_) => {
                "registration failed"
            }
            RegistryError::StorageRead(_) => "read failed",
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            RegistryError::StorageScan(_)
                | RegistryError::StorageWrite(_)
                | RegistryError::StorageRead(_)
        )
    }
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::InvalidEmail => StatusCode::BAD_REQUEST,
            RegistryError::AlreadyRegistered => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_storage() {
            tracing::error!(error = %self, "registry storage failure");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.public_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_failure() -> StorageError {
        StorageError::Io(io::Error::other("/var/secret/email.txt"))
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RegistryError::InvalidEmail.status_code(), 400);
        assert_eq!(RegistryError::AlreadyRegistered.status_code(), 409);
        assert_eq!(RegistryError::StorageScan(io_failure()).status_code(), 500);
        assert_eq!(RegistryError::StorageWrite(io_failure()).status_code(), 500);
        assert_eq!(RegistryError::StorageRead(io_failure()).status_code(), 500);
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(RegistryError::InvalidEmail.public_message(), "invalid email");
        assert_eq!(
            RegistryError::AlreadyRegistered.public_message(),
            "already registered"
        );
        assert_eq!(
            RegistryError::StorageScan(io_failure()).public_message(),
            "registration failed"
        );
        assert_eq!(
            RegistryError::StorageRead(io_failure()).public_message(),
            "read failed"
        );
    }

    #[actix_web::test]
    async fn test_error_response_hides_internal_detail() {
        let resp = RegistryError::StorageWrite(io_failure()).error_response();
        assert_eq!(resp.status(), 500);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(!body_str.contains("/var/secret"));

        let body_json: serde_json::Value = serde_json::from_str(body_str).unwrap();
        assert_eq!(body_json, serde_json::json!({ "error": "registration failed" }));
    }
}
