use crate::error::RegistryError;
use crate::models::{EmailRequest, SubmitResponse};
use crate::registry::EmailRegistry;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, web};

/// # Email Registration Endpoint
///
/// Stores an email address unless it is already registered.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: `{"success": true, "message": "Email registered successfully"}`
/// - **400 Bad Request**: missing email, no `@`, or unreadable body
/// - **409 Conflict**: email already registered (case-insensitive)
/// - **500 Internal Server Error**: registry could not be read or appended to
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/emails",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email registered", body = SubmitResponse),
        (status = 400, description = "Invalid email", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse),
        (status = 500, description = "Registration failed", body = crate::models::ErrorResponse)
    ),
    tag = "Email Registry"
)]
#[post("/emails")]
pub async fn submit_email(
    req: web::Json<EmailRequest>,
    registry: web::Data<EmailRegistry>,
) -> Result<HttpResponse, RegistryError> {
    registry.submit(req.email.as_deref()).await?;
    Ok(HttpResponse::Ok().json(SubmitResponse::registered()))
}

/// # Registry Dump Endpoint
///
/// Returns every stored line as plain text, unparsed, in append order. An
/// empty registry returns an empty body.
#[utoipa::path(
    get,
    path = "/api/emails",
    responses(
        (status = 200, description = "Raw registry content", body = String, content_type = "text/plain"),
        (status = 500, description = "Registry could not be read", body = crate::models::ErrorResponse)
    ),
    tag = "Email Registry"
)]
#[get("/emails")]
pub async fn list_emails(
    registry: web::Data<EmailRegistry>,
) -> Result<HttpResponse, RegistryError> {
    let content = registry.list_all().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(content))
}

/// Configures the registry routes under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_email).service(list_emails);
}
