//! Email Service Interface
//!
//! Defines the trait for email service implementations that deliver
//! verification codes and other transactional messages.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Email service trait for sending HTML messages
///
/// Implementations include:
/// - Resend HTTP API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an HTML email
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient address
    /// * `subject` - Subject line
    /// * `html` - HTML body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
