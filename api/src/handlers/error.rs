//! Mapping of domain errors to localized HTTP responses
//!
//! Every failing endpoint answers with `{"error": <localized text>, "kind":
//! <ERROR_KIND>}`. Text and status come from the message catalogue.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use cl_core::{DomainError, OtpError, ValidationError};
use cl_shared::{error_codes, ErrorResponse, Language};

use crate::i18n::{get_error_message, request_language};

/// Catalogue key for a domain error
pub fn error_key(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation(ValidationError::EmailRequired) => "email_required",
        DomainError::Validation(ValidationError::EmailAndCodeRequired) => "email_and_code_required",
        DomainError::Otp(OtpError::NoPendingCode) => "no_pending_code",
        DomainError::Otp(OtpError::CodeExpired) => "code_expired",
        DomainError::Otp(OtpError::CodeMismatch) => "code_mismatch",
        DomainError::Delivery { .. } => "delivery_failed",
        DomainError::Storage { .. } => "storage_fault",
        DomainError::Internal { .. } => "internal_error",
    }
}

/// Build the error response for a catalogue key
///
/// Falls back to `fallback_kind` with a 500 status if the key is unknown.
pub fn message_response(key: &str, fallback_kind: &str, lang: Language) -> HttpResponse {
    let (status, body) = match get_error_message(key, lang) {
        Some(msg) => (
            StatusCode::from_u16(msg.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ErrorResponse::new(msg.kind, msg.message),
        ),
        None => {
            tracing::error!(key = key, "Missing message catalogue entry");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(fallback_kind, key),
            )
        }
    };

    HttpResponse::build(status).json(body)
}

/// Convert a domain error into its HTTP response
pub fn error_response(error: &DomainError, lang: Language) -> HttpResponse {
    message_response(error_key(error), error.kind(), lang)
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        path = %req.path(),
        error = %err,
        event = "invalid_request_body",
        "Rejected request body"
    );

    let response = message_response(
        "invalid_request",
        error_codes::VALIDATION_ERROR,
        request_language(req),
    );
    InternalError::from_response(err, response).into()
}

/// Default handler for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    message_response("not_found", error_codes::NOT_FOUND, request_language(&req))
}
