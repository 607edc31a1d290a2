//! Resend Email Service Implementation
//!
//! Sends email through the Resend HTTP API (`POST /emails`).
//!
//! ## Features
//!
//! - Bearer token authentication
//! - Request timeout
//! - Provider error messages surfaced in the returned error
//! - Security: recipient masking in logs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use cl_core::mask_email;
use cl_shared::EmailConfig;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Resend service configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key (`re_...`)
    pub api_key: String,
    /// API base URL, without trailing slash
    pub api_base_url: String,
    /// Sender address
    pub from_address: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl ResendConfig {
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            from_address: config.from_address.clone(),
            request_timeout_secs: config.timeout_secs,
        }
    }
}

/// Body of `POST /emails`
#[derive(Debug, Serialize)]
pub(crate) struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Resend email service implementation
pub struct ResendEmailService {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailService {
    /// Create a new Resend email service
    pub fn new(config: ResendConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "Resend API key is not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            from = %config.from_address,
            base_url = %config.api_base_url,
            "Resend email service initialized"
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_base_url)
    }

    pub(crate) fn request<'a>(
        &'a self,
        to: &'a str,
        subject: &'a str,
        html: &'a str,
    ) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.config.from_address,
            to: [to],
            subject,
            html,
        }
    }
}

#[async_trait]
impl EmailService for ResendEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&self.request(to, subject, html))
            .send()
            .await
            .map_err(|e| {
                error!(provider = "resend", email = %masked, error = %e, "Email request failed");
                InfrastructureError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| match (e.name, e.message) {
                    (Some(name), Some(message)) => Some(format!("{}: {}", name, message)),
                    (None, Some(message)) => Some(message),
                    (Some(name), None) => Some(name),
                    (None, None) => None,
                })
                .unwrap_or(body);

            error!(
                provider = "resend",
                email = %masked,
                status = status.as_u16(),
                error = %detail,
                "Resend rejected email"
            );
            return Err(InfrastructureError::Email(format!(
                "Resend returned {}: {}",
                status, detail
            )));
        }

        let sent: SendEmailResponse = response.json().await?;

        info!(
            target: "email_service",
            provider = "resend",
            email = %masked,
            message_id = %sent.id,
            "Email sent successfully"
        );

        Ok(sent.id)
    }

    fn provider_name(&self) -> &str {
        "Resend"
    }
}
