use actix_web::HttpResponse;

use cl_shared::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("cineluxe-api", env!("CARGO_PKG_VERSION")))
}
