//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients are served from a known set of origins. The list comes
//! from configuration; a single `*` entry opens the API to any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use cl_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::warn!("CORS allows any origin");
        return cors.allow_any_origin();
    }

    tracing::info!(origins = ?config.allowed_origins, "Configuring CORS");
    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
