use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use anyhow::Context;
use email_registry::config::Config;
use email_registry::openapi::ApiDoc;
use email_registry::registry::EmailRegistry;
use email_registry::routes::cors::frontend_cors;
use email_registry::storage::FileStore;
use email_registry::telemetry;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Registry Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - The registry routes (`/`, `/health`, `/api/emails`)
/// - CORS for the configured frontend origin
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// All workers share one [`EmailRegistry`], so its writer lock covers every
/// request served by this process.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_format);

    info!(
        registry = %config.registry_path.display(),
        origin = %config.frontend_origin,
        "Starting email registry"
    );

    let store = FileStore::new(config.registry_path.clone());
    let registry = Data::new(EmailRegistry::new(Arc::new(store)));
    let origin = config.frontend_origin.clone();

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(frontend_cors(&origin))
            .wrap(Logger::default())
            .app_data(registry.clone())
            .configure(email_registry::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(config.bind_address())
    .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?;

    info!("Listening on {}:{}", config.host, config.port);

    server.run().await.context("Server error")?;
    Ok(())
}
