//! Email Service Module
//!
//! This module provides email service implementations for sending
//! verification codes. It includes a production provider and a mock
//! implementation for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all email providers
//! - **Resend Support**: Production email via the Resend HTTP API
//! - **Mock Implementation**: Console output for development
//! - **Adapter**: Bridges any provider to the core `EmailSender` trait

use cl_shared::{EmailConfig, EmailProvider};

pub mod adapter;
pub mod email_service;
pub mod mock_email;
pub mod resend;

// Re-export commonly used types
pub use adapter::EmailServiceAdapter;
pub use email_service::EmailService;
pub use mock_email::MockEmailService;
pub use resend::{ResendConfig, ResendEmailService};

/// Create an email service based on configuration
///
/// Returns the provider named in the configuration. A Resend provider that
/// cannot be built is reported as an error rather than silently replaced,
/// so a misconfigured deployment fails at startup.
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Box<dyn EmailService>, crate::InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            tracing::warn!("Using mock email service; verification codes are printed, not sent");
            Ok(Box::new(MockEmailService::new()))
        }
        EmailProvider::Resend => {
            let service = ResendEmailService::new(ResendConfig::from_email_config(config))?;
            Ok(Box::new(service))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mock_service() {
        let config = EmailConfig {
            provider: EmailProvider::Mock,
            ..Default::default()
        };
        let service = create_email_service(&config).unwrap();
        assert_eq!(service.provider_name(), "Mock");
    }

    #[test]
    fn test_create_resend_service_requires_api_key() {
        let config = EmailConfig::default();
        assert!(create_email_service(&config).is_err());

        let config = EmailConfig {
            api_key: "re_test_key".to_string(),
            ..Default::default()
        };
        let service = create_email_service(&config).unwrap();
        assert_eq!(service.provider_name(), "Resend");
    }
}
