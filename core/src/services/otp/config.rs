//! Configuration for the OTP service

use chrono::Duration;

use cl_shared::AppConfig;

use crate::domain::entities::DEFAULT_EXPIRATION_SECONDS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of seconds before an issued code expires
    pub code_ttl_seconds: i64,
    /// Persist the record before sending the email instead of after delivery succeeds
    pub persist_before_delivery: bool,
    /// Subject line of the verification email
    pub email_subject: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_EXPIRATION_SECONDS,
            persist_before_delivery: false,
            email_subject: "كود التحقق لحساب Cine Luxe".to_string(),
        }
    }
}

impl OtpServiceConfig {
    /// Build the service configuration from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            code_ttl_seconds: config.otp.code_ttl_seconds,
            persist_before_delivery: config.otp.persist_before_delivery,
            email_subject: config.email.subject.clone(),
        }
    }

    /// Code lifetime as a duration
    ///
    /// `None` when the configured lifetime is not a positive number of
    /// seconds that chrono can represent.
    pub fn code_ttl(&self) -> Option<Duration> {
        if self.code_ttl_seconds <= 0 {
            return None;
        }
        Duration::try_seconds(self.code_ttl_seconds)
    }
}
