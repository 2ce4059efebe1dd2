use crate::registry::EmailRegistry;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Liveness endpoint. Always answers `"ok"`; storage is not checked.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = crate::models::HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(registry: web::Data<EmailRegistry>) -> impl Responder {
    HttpResponse::Ok().json(registry.health())
}

/// # Route Configuration
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
