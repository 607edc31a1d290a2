//! Domain-specific error types and error handling.

mod types;

pub use types::{OtpError, ValidationError};

use cl_shared::error_codes;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Otp(#[from] OtpError),

    /// The email collaborator reported a failure
    #[error("Email delivery failed: {message}")]
    Delivery { message: String },

    /// The code store failed to read or write
    #[error("Storage fault: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable kind of this error
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
            DomainError::Otp(OtpError::NoPendingCode) => error_codes::NO_PENDING_CODE,
            DomainError::Otp(OtpError::CodeExpired) => error_codes::CODE_EXPIRED,
            DomainError::Otp(OtpError::CodeMismatch) => error_codes::CODE_MISMATCH,
            DomainError::Delivery { .. } => error_codes::DELIVERY_FAILED,
            DomainError::Storage { .. } => error_codes::STORAGE_FAULT,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
