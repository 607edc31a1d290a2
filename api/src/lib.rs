//! # Cine Luxe API
//!
//! HTTP surface of the email sign-in backend: request DTOs, route handlers,
//! localized error mapping, CORS, and the application factory shared by the
//! binary and the integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::otp::AppState;
