use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cl_core::{mask_email, CodeStore, DomainError, EmailSender, ValidationError};

use super::AppState;
use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error_response;
use crate::i18n::{get_success_message, request_language};

/// Handler for POST /verify-code
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com", "code": "482913" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "تم التحقق بنجاح!" }
/// ```
///
/// ## Errors
/// - 400 `VALIDATION_ERROR`, `NO_PENDING_CODE`, `CODE_EXPIRED`, `CODE_MISMATCH`
/// - 500 `STORAGE_FAULT`
pub async fn verify_code<S, E>(
    req: HttpRequest,
    state: web::Data<AppState<S, E>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    S: CodeStore + 'static,
    E: EmailSender + 'static,
{
    let lang = request_language(&req);

    if request.validate().is_err() {
        tracing::warn!(event = "invalid_verify_code_request", "Email or code missing from request");
        return error_response(&DomainError::from(ValidationError::EmailAndCodeRequired), lang);
    }
    let email = request.email.as_deref().unwrap_or_default();
    let code = request.code.as_deref().unwrap_or_default();

    match state.otp_service.verify_code(email, code).await {
        Ok(result) => HttpResponse::Ok().json(VerifyCodeResponse {
            success: result.success,
            message: get_success_message("code_verified", lang),
        }),
        Err(error) => {
            tracing::debug!(
                email = %mask_email(email),
                kind = error.kind(),
                "Verification rejected"
            );
            error_response(&error, lang)
        }
    }
}
