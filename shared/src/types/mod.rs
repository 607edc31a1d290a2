//! Type definitions module
//!
//! - `language` - Internationalization and language types
//! - `response` - Health check response types

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{HealthResponse, HealthStatus};
