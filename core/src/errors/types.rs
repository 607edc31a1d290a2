//! Error types for one-time passcode issuance and verification
//!
//! Messages here are for logs. The localized text shown to users is
//! configured in the presentation layer.

use thiserror::Error;

/// Terminal outcomes of a failed verification
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    /// Never issued, already consumed, or already expired and cleaned up
    #[error("No pending verification code")]
    NoPendingCode,

    /// Past the validity window; the record was removed on detection
    #[error("Verification code expired")]
    CodeExpired,

    /// Valid record, different code; the record is kept for retry
    #[error("Verification code does not match")]
    CodeMismatch,
}

/// Input validation errors, raised before any store access
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: email")]
    EmailRequired,

    #[error("Fields required: email, code")]
    EmailAndCodeRequired,
}
