use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload for `GET /health`. The status is always `"ok"`; no
/// dependency (storage included) is checked.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
