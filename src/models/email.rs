use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/emails`. A missing or `null` `email` deserializes to
/// `None` and is rejected by the registry rather than by the extractor.
#[derive(Deserialize, ToSchema, Debug)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

impl SubmitResponse {
    pub fn registered() -> Self {
        Self {
            success: true,
            message: "Email registered successfully".to_string(),
        }
    }
}

/// Uniform failure body: a single `error` string, never internal detail.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
