//! # Cine Luxe Core
//!
//! Core domain layer for the Cine Luxe sign-in backend.
//! This crate contains the verification record entity, the error taxonomy,
//! and the OTP service together with the collaborator traits it is built on
//! (code store, email sender, clock).

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
