use utoipa::OpenApi;

/// OpenAPI Document
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served by the binary at `/api-docs/openapi.json`, with
/// Swagger UI under `/swagger-ui/`.
///
/// # Endpoints
/// - Welcome: `GET /`
/// - Health Check: `GET /health`
/// - Registration: `POST /api/emails`
/// - Registry dump: `GET /api/emails`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health::health,
        crate::routes::email::submit_email,
        crate::routes::email::list_emails,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::EmailRequest,
            crate::models::SubmitResponse,
            crate::models::ErrorResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service liveness endpoints"),
        (name = "Email Registry", description = "Email registration and registry dump")
    ),
    info(
        description = "Append-only email registry with case-insensitive deduplication",
        title = "Email Registry API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
