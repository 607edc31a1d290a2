//! Application factory
//!
//! Builds the Actix-web application from the shared state and configuration.
//! The binary and the integration tests both go through `create_app`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use tracing_actix_web::TracingLogger;

use cl_core::{CodeStore, EmailSender};
use cl_shared::AppConfig;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::create_cors;
use crate::routes::{
    health::health_check,
    otp::{send_code, verify_code, AppState},
};

/// Create and configure the application with all dependencies
pub fn create_app<S, E>(
    app_state: web::Data<AppState<S, E>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: CodeStore + 'static,
    E: EmailSender + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::Data::new(config.i18n.clone()))
        .app_data(json_config)
        // Middleware: the last one wrapped runs first
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP routes
        .route("/send-code", web::post().to(send_code::<S, E>))
        .route("/verify-code", web::post().to(verify_code::<S, E>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
