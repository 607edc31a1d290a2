use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use cl_api::{config::init_tracing, create_app, AppState};
use cl_core::{OtpService, OtpServiceConfig};
use cl_infra::email::{create_email_service, EmailServiceAdapter};
use cl_infra::store::ConfiguredCodeStore;
use cl_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific .env first, then the generic one
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        environment = %config.environment,
        "Starting Cine Luxe API Server"
    );

    let store = Arc::new(ConfiguredCodeStore::from_config(&config.store));

    let email_service =
        create_email_service(&config.email).context("Failed to initialize email service")?;
    tracing::info!(provider = email_service.provider_name(), "Email service ready");
    let email_sender = Arc::new(EmailServiceAdapter::new(email_service));

    let otp_service =
        OtpService::new(store, email_sender, OtpServiceConfig::from_app_config(&config));
    let app_state = web::Data::new(AppState::new(Arc::new(otp_service)));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let workers = config.server.workers;
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
