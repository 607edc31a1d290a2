//! One-time passcode configuration

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest accepted code lifetime in seconds (one day)
pub const MAX_CODE_TTL_SECONDS: i64 = 86_400;

/// OTP issuance configuration
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct OtpConfig {
    /// Lifetime of an issued code in seconds
    #[serde(default = "default_code_ttl_seconds")]
    #[validate(range(min = 1, max = 86400))]
    pub code_ttl_seconds: i64,

    /// Persist the record before the email is sent instead of after the
    /// provider acknowledged it
    #[serde(default)]
    pub persist_before_delivery: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl_seconds(),
            persist_before_delivery: false,
        }
    }
}

fn default_code_ttl_seconds() -> i64 {
    300
}
