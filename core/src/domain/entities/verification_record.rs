//! Verification record entity for email one-time passcodes.

use chrono::{DateTime, Duration, TimeZone, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default lifetime of a verification code (5 minutes)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 300;

/// Pending verification code for one email address
///
/// Serialized as `{"code": "482913", "expires": 1700000300000}` with the
/// expiry in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// The 6-digit verification code
    pub code: String,

    /// Instant after which the code is no longer accepted
    #[serde(rename = "expires", with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a record from an existing code and expiry
    pub fn new(code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            expires_at: truncate_to_millis(expires_at),
        }
    }

    /// Issues a record with a fresh random code expiring `ttl` after `now`
    ///
    /// `None` when the expiry falls outside the representable range.
    pub fn issue(now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;
        Some(Self::new(Self::generate_code(), expires_at))
    }

    /// Generates a code uniformly from [`CODE_MIN`, `CODE_MAX`] using the OS CSPRNG
    ///
    /// The range has no leading zeros, so the result is always exactly
    /// [`CODE_LENGTH`] ASCII digits.
    pub fn generate_code() -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// Whether the record is expired at `now`
    ///
    /// A verification at exactly `expires_at` is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Exact string comparison of a submitted code, in constant time
    ///
    /// No trimming or numeric normalisation is applied.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len()
            && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

}

/// Drops sub-millisecond precision so the in-memory value equals the persisted one
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(instant.timestamp_millis())
        .single()
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..1_000 {
            let code = VerificationRecord::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("Generated code should be a valid number");
            assert!((CODE_MIN..=CODE_MAX).contains(&num));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: HashSet<String> =
            (0..100).map(|_| VerificationRecord::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_issue_sets_expiry() {
        let now = at(1_700_000_000_000);
        let record =
            VerificationRecord::issue(now, Duration::seconds(DEFAULT_EXPIRATION_SECONDS)).unwrap();
        assert_eq!(record.expires_at, at(1_700_000_300_000));
        assert_eq!(record.code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_issue_rejects_unrepresentable_expiry() {
        let now = at(1_700_000_000_000);
        assert!(VerificationRecord::issue(now, Duration::milliseconds(i64::MAX)).is_none());
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let record = VerificationRecord::new("482913", at(300_000));
        assert!(!record.is_expired_at(at(299_999)));
        assert!(!record.is_expired_at(at(300_000)));
        assert!(record.is_expired_at(at(300_001)));
    }

    #[test]
    fn test_matches_is_exact() {
        let record = VerificationRecord::new("482913", at(300_000));
        assert!(record.matches("482913"));
        assert!(!record.matches("482914"));
        assert!(!record.matches(" 482913"));
        assert!(!record.matches("482913 "));
        assert!(!record.matches("0482913"));
        assert!(!record.matches(""));
    }

    #[test]
    fn test_serialization_layout() {
        let record = VerificationRecord::new("482913", at(1_700_000_300_000));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"code": "482913", "expires": 1_700_000_300_000i64}));

        let parsed: VerificationRecord =
            serde_json::from_str(r#"{"code":"123456","expires":1700000300000}"#).unwrap();
        assert_eq!(parsed.code, "123456");
        assert_eq!(parsed.expires_at, at(1_700_000_300_000));
    }

    #[test]
    fn test_new_truncates_to_millis() {
        let precise = at(1_000) + Duration::nanoseconds(123_456);
        let record = VerificationRecord::new("100000", precise);
        assert_eq!(record.expires_at, at(1_000));
    }
}
