//! Shared utilities and common types for the Cine Luxe server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and the layered configuration loader
//! - Wire error body and error kind codes
//! - Language and health response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, EmailConfig, EmailProvider, Environment, I18nConfig, LogFormat,
    LoggingConfig, OtpConfig, ReadFailurePolicy, ServerConfig, StoreBackend, StoreConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, Language};
