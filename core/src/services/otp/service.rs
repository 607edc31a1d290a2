//! Main OTP service implementation

use std::sync::Arc;

use crate::domain::entities::VerificationRecord;
use crate::errors::{DomainError, DomainResult, OtpError, ValidationError};

use super::clock::{Clock, SystemClock};
use super::config::OtpServiceConfig;
use super::locks::EmailLocks;
use super::template::verification_email;
use super::traits::{CodeStore, EmailSender};
use super::types::{IssueCodeResult, VerifyCodeResult};

/// Email one-time passcode service
///
/// Issues a fresh code per email address, delivers it by email, and accepts
/// it back exactly once within its validity window. Issuing again replaces
/// any pending code for the same address.
pub struct OtpService<S: CodeStore, E: EmailSender> {
    /// Store of pending codes keyed by email
    store: Arc<S>,
    /// Outbound email collaborator
    email_sender: Arc<E>,
    /// Time source for expiry
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: OtpServiceConfig,
    /// Serializes issue/verify cycles per email
    locks: EmailLocks,
}

impl<S: CodeStore, E: EmailSender> OtpService<S, E> {
    /// Create a new OTP service on the system clock
    ///
    /// # Arguments
    ///
    /// * `store` - Code store implementation
    /// * `email_sender` - Email sender implementation
    /// * `config` - Service configuration
    pub fn new(store: Arc<S>, email_sender: Arc<E>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            email_sender,
            clock: Arc::new(SystemClock),
            config,
            locks: EmailLocks::new(),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Service configuration
    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a new code for `email` and send it
    ///
    /// This method:
    /// 1. Rejects an empty email before touching the store
    /// 2. Generates a fresh code expiring one TTL from now, failing with
    ///    `Internal` if the configured TTL cannot produce an expiry
    /// 3. Sends the code by email and stores it, replacing any pending code
    ///
    /// By default the record is stored only after delivery succeeds, so a
    /// failed send leaves any previous code untouched. With
    /// `persist_before_delivery` the record is stored first and stays in
    /// place even if the send fails.
    ///
    /// The code is never part of the result.
    pub async fn issue_code(&self, email: &str) -> DomainResult<IssueCodeResult> {
        if email.is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }

        let masked = mask_email(email);
        let _guard = self.locks.acquire(email).await;

        let record = self
            .config
            .code_ttl()
            .and_then(|ttl| VerificationRecord::issue(self.clock.now(), ttl))
            .ok_or_else(|| {
                tracing::error!(
                    email = %masked,
                    code_ttl_seconds = self.config.code_ttl_seconds,
                    event = "otp_ttl_invalid",
                    "Configured code lifetime cannot produce an expiry"
                );
                DomainError::Internal {
                    message: format!(
                        "code lifetime of {}s is out of range",
                        self.config.code_ttl_seconds
                    ),
                }
            })?;
        let message = verification_email(email, &self.config.email_subject, &record.code);

        tracing::info!(
            email = %masked,
            event = "otp_generated",
            expires_at = %record.expires_at,
            "Generated new verification code"
        );

        if self.config.persist_before_delivery {
            self.persist(email, &masked, &record).await?;
        }

        let message_id = self
            .email_sender
            .send_email(&message)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to send verification email"
                );
                DomainError::Delivery { message: e }
            })?;

        if !self.config.persist_before_delivery {
            self.persist(email, &masked, &record).await?;
        }

        tracing::info!(
            email = %masked,
            message_id = %message_id,
            event = "otp_sent",
            "Verification code sent"
        );

        Ok(IssueCodeResult {
            message_id,
            expires_at: record.expires_at,
        })
    }

    /// Verify `code` against the pending record for `email`
    ///
    /// Outcomes:
    /// - no record: `NoPendingCode`
    /// - record past its expiry: removed, `CodeExpired`
    /// - matching code: removed, success
    /// - anything else: record kept, `CodeMismatch`
    ///
    /// A successful verification consumes the code. If the removal cannot be
    /// made durable the call fails with a storage fault instead.
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        if email.is_empty() || code.is_empty() {
            return Err(ValidationError::EmailAndCodeRequired.into());
        }

        let masked = mask_email(email);
        let _guard = self.locks.acquire(email).await;

        let record = self
            .store
            .get(email)
            .await
            .map_err(|e| storage_fault(&masked, "otp_read_failed", e))?;

        let Some(record) = record else {
            tracing::warn!(
                email = %masked,
                event = "otp_not_found",
                "No pending verification code"
            );
            return Err(OtpError::NoPendingCode.into());
        };

        let now = self.clock.now();

        if record.is_expired_at(now) {
            if let Err(e) = self.store.delete(email).await {
                tracing::warn!(
                    email = %masked,
                    error = %e,
                    event = "otp_cleanup_failed",
                    "Failed to remove expired verification code"
                );
            }
            tracing::info!(
                email = %masked,
                event = "otp_expired",
                expired_at = %record.expires_at,
                "Verification code expired"
            );
            return Err(OtpError::CodeExpired.into());
        }

        if !record.matches(code) {
            tracing::warn!(
                email = %masked,
                event = "otp_verification_failed",
                "Verification code does not match"
            );
            return Err(OtpError::CodeMismatch.into());
        }

        self.store
            .delete(email)
            .await
            .map_err(|e| storage_fault(&masked, "otp_consume_failed", e))?;

        tracing::info!(
            email = %masked,
            event = "otp_verified_success",
            "Verification code successfully verified"
        );

        Ok(VerifyCodeResult {
            success: true,
            verified_at: now,
        })
    }

    async fn persist(
        &self,
        email: &str,
        masked: &str,
        record: &VerificationRecord,
    ) -> DomainResult<()> {
        self.store
            .put(email, record)
            .await
            .map_err(|e| storage_fault(masked, "otp_storage_failed", e))
    }
}

fn storage_fault(masked: &str, event: &'static str, error: String) -> DomainError {
    tracing::error!(
        email = %masked,
        error = %error,
        event = event,
        "Verification code store failed"
    );
    DomainError::Storage { message: error }
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain, so
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}
