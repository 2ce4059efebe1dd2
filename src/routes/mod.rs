use crate::error::RegistryError;
use actix_web::error::JsonPayloadError;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns `{"status": "ok", "timestamp": ...}`; no dependency is checked.
pub mod health;

/// # Email Registry Endpoints
///
/// - `POST /api/emails`: register an address (400 / 409 / 500 on failure)
/// - `GET /api/emails`: dump the raw registry as plain text
pub mod email;

/// Browser cross-origin policy, applied by the binary around the whole app.
pub mod cors;


pub const WELCOME_MESSAGE: &str = "Welcome to the backend server";

/// Plain-text greeting at the root path.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
    tag = "Health Check"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(WELCOME_MESSAGE)
}

/// Any body the JSON extractor cannot read is treated as an invalid email.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected request body");
    RegistryError::InvalidEmail.into()
}

/// # Route Configuration
///
/// ```text
/// GET  /            - Welcome message
/// GET  /health      - Service health status
/// POST /api/emails  - Register an email
/// GET  /api/emails  - Dump the registry
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(index)
        .configure(health::configure_routes)
        .service(web::scope("/api").configure(email::configure_routes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EmailRegistry;
    use crate::storage::MemoryStore;
    use actix_web::{App, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_index_welcome() {
        let registry = web::Data::new(EmailRegistry::new(Arc::new(MemoryStore::new())));
        let app = test::init_service(App::new().app_data(registry).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], WELCOME_MESSAGE.as_bytes());
    }
}
