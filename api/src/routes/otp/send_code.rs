use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cl_core::{mask_email, CodeStore, DomainError, EmailSender, ValidationError};

use super::AppState;
use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error_response;
use crate::i18n::{get_success_message, request_language};

/// Handler for POST /send-code
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "تم إرسال كود التحقق بنجاح." }
/// ```
///
/// ## Errors
/// - 400 `VALIDATION_ERROR` when the email is missing or empty
/// - 500 `DELIVERY_FAILED` when the provider rejects the message
/// - 500 `STORAGE_FAULT` when the code cannot be stored
/// - 500 `INTERNAL_ERROR` when the configured code lifetime is unusable
pub async fn send_code<S, E>(
    req: HttpRequest,
    state: web::Data<AppState<S, E>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    S: CodeStore + 'static,
    E: EmailSender + 'static,
{
    let lang = request_language(&req);

    if request.validate().is_err() {
        tracing::warn!(event = "invalid_send_code_request", "Email missing from request");
        return error_response(&DomainError::from(ValidationError::EmailRequired), lang);
    }
    let email = request.email.as_deref().unwrap_or_default();

    match state.otp_service.issue_code(email).await {
        Ok(result) => {
            tracing::info!(
                email = %mask_email(email),
                message_id = %result.message_id,
                "Verification code issued"
            );
            HttpResponse::Ok().json(SendCodeResponse {
                message: get_success_message("code_sent", lang),
            })
        }
        Err(error) => {
            tracing::warn!(
                email = %mask_email(email),
                kind = error.kind(),
                error = %error,
                "Failed to issue verification code"
            );
            error_response(&error, lang)
        }
    }
}
