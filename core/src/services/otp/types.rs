//! Types for OTP service inputs and results

use chrono::{DateTime, Utc};

/// A rendered email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

/// Result of issuing a code
///
/// The code itself is deliberately absent; it only travels by email.
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// Message id reported by the email provider
    pub message_id: String,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Always true; failures are reported as errors
    pub success: bool,
    /// When the code was consumed
    pub verified_at: DateTime<Utc>,
}
