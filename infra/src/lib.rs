//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Cine Luxe sign-in
//! backend. It provides concrete implementations of the collaborators the
//! OTP service is built on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Store**: verification code stores (JSON file document, in-memory map)
//! - **Email**: email provider integrations (Resend HTTP API, console mock)

// Re-export core types for convenience
pub use cl_core::errors::*;

/// Verification code store module
pub mod store;

/// Email service module - External email providers
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error from the file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),
}
