//! Email Service Trait Adapter
//!
//! Implements the core `EmailSender` trait for any infrastructure
//! `EmailService`, bridging the provider implementations with the domain.

use async_trait::async_trait;
use cl_core::{EmailMessage, EmailSender};

use super::email_service::EmailService;

/// Adapter that implements the core EmailSender for a boxed provider
pub struct EmailServiceAdapter {
    inner: Box<dyn EmailService>,
}

impl EmailServiceAdapter {
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EmailSender for EmailServiceAdapter {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        self.inner
            .send_email(&message.to, &message.subject, &message.html)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MockEmailService;

    #[tokio::test]
    async fn test_adapter_forwards_message() {
        let mock = MockEmailService::with_options(false, false);
        let adapter = EmailServiceAdapter::new(Box::new(mock.clone()));

        let message = EmailMessage {
            to: "alice@example.com".to_string(),
            subject: "Code".to_string(),
            html: "<strong>482913</strong>".to_string(),
        };
        let id = adapter.send_email(&message).await.unwrap();

        assert!(id.starts_with("mock_"));
        assert_eq!(mock.get_message_count(), 1);
        assert_eq!(mock.last_message().unwrap().html, message.html);
    }

    #[tokio::test]
    async fn test_adapter_stringifies_errors() {
        let mock = MockEmailService::with_options(false, true);
        let adapter = EmailServiceAdapter::new(Box::new(mock));
        let message = EmailMessage {
            to: "alice@example.com".to_string(),
            subject: "Code".to_string(),
            html: String::new(),
        };

        let error = adapter.send_email(&message).await.unwrap_err();
        assert!(error.contains("Simulated email sending failure"));
    }
}
