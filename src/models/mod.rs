/// # Email Submission Wire Types
///
/// Request and response bodies for `/api/emails`:
/// - [`EmailRequest`]: `{"email": "user@example.com"}`
/// - [`SubmitResponse`]: `{"success": true, "message": "..."}`
/// - [`ErrorResponse`]: `{"error": "..."}`, shared by every failure path
pub mod email;

/// The [`Entry`] record and its line encoding.
pub mod entry;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
pub mod health;

pub use email::{EmailRequest, ErrorResponse, SubmitResponse};
pub use entry::Entry;
pub use health::HealthResponse;
