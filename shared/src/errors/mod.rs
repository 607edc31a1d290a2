//! Wire error body and error kind codes

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint
///
/// `error` carries the localized, human-readable text that existing clients
/// display. `kind` is a stable discriminator for clients that branch on the
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Localized message
    pub error: String,

    /// One of the [`error_codes`] constants
    pub kind: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(kind: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: kind.into(),
        }
    }
}

/// Error kinds used across the application
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NO_PENDING_CODE: &str = "NO_PENDING_CODE";
    pub const CODE_EXPIRED: &str = "CODE_EXPIRED";
    pub const CODE_MISMATCH: &str = "CODE_MISMATCH";
    pub const DELIVERY_FAILED: &str = "DELIVERY_FAILED";
    pub const STORAGE_FAULT: &str = "STORAGE_FAULT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new(error_codes::CODE_EXPIRED, "expired");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "expired");
        assert_eq!(json["kind"], "CODE_EXPIRED");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
