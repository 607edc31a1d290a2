//! Mock Email Service Implementation
//!
//! Prints messages to the console instead of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use cl_core::{mask_email, EmailMessage};

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// This implementation:
/// - Prints messages to the console
/// - Generates mock message IDs
/// - Tracks sent messages for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Most recent message
    last_message: Arc<Mutex<Option<EmailMessage>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_message: Arc::new(Mutex::new(None)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Most recently sent message
    pub fn last_message(&self) -> Option<EmailMessage> {
        self.last_message
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(provider = "mock", email = %masked, "Mock email service simulating failure");
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", html);
            println!("{}\n", "=".repeat(60));
        }

        *self.last_message.lock().unwrap_or_else(|e| e.into_inner()) = Some(EmailMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });

        info!(
            target: "email_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
