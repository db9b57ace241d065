use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for the chat front-end
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5000,http://127.0.0.1:5000")
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type
///
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5000,http://127.0.0.1:5000".to_string());

    let origins: Vec<&str> = allowed_origins.split(',').collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}
