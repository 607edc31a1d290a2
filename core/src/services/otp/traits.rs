//! Traits for code store and email integration

use async_trait::async_trait;

use crate::domain::entities::VerificationRecord;

use super::types::EmailMessage;

/// Keyed persistence of pending verification records
///
/// Keys are exact email strings. The OTP service is the sole reader and
/// writer; implementations must make each call atomic with respect to the
/// others.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Get the pending record for an email, if any
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String>;
    /// Store a record, replacing any existing one for the email
    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String>;
    /// Remove the record for an email; no-op if absent
    async fn delete(&self, email: &str) -> Result<(), String>;
}

/// Outbound email collaborator
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a rendered message, returning the provider's message id
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String>;
}
