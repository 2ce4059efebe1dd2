use actix_cors::Cors;

/// Cross-origin policy for the browser frontend: one allowed origin, with
/// credentials, exposing `set-cookie`.
pub fn frontend_cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .expose_headers(["set-cookie"])
        .max_age(3600)
}
