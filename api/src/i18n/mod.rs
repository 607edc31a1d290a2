//! Localized user-facing messages
//!
//! The catalogue is `i18n/messages.toml`, embedded at compile time. Entries in
//! a file at the same relative path in the working directory replace the
//! embedded ones key by key, so text can be adjusted without a rebuild.
//! Keys the file leaves out keep their embedded text.

use actix_web::{http::header, web, HttpRequest};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use cl_shared::{I18nConfig, Language};

const EMBEDDED_MESSAGES: &str = include_str!("../../i18n/messages.toml");
const OVERRIDE_PATH: &str = "i18n/messages.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub en: String,
    pub ar: String,
    pub code: String,
    pub http_status: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuccessMessage {
    pub en: String,
    pub ar: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub errors: HashMap<String, ErrorMessage>,
    #[serde(default)]
    pub success: HashMap<String, SuccessMessage>,
}

impl Messages {
    /// Overlay `other` on top of these messages, entry by entry
    pub fn merge(&mut self, other: Messages) {
        self.errors.extend(other.errors);
        self.success.extend(other.success);
    }
}

pub static MESSAGES: Lazy<Messages> =
    Lazy::new(|| load_messages(fs::read_to_string(OVERRIDE_PATH).ok().as_deref()));

fn load_messages(override_content: Option<&str>) -> Messages {
    let mut messages: Messages = toml::from_str(EMBEDDED_MESSAGES).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Embedded message catalogue is invalid");
        Messages::default()
    });

    if let Some(content) = override_content {
        match toml::from_str(content) {
            Ok(overrides) => messages.merge(overrides),
            Err(e) => tracing::warn!(
                path = OVERRIDE_PATH,
                error = %e,
                "Ignoring invalid message catalogue, using embedded messages"
            ),
        }
    }

    messages
}

/// Error text resolved for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedError {
    pub kind: String,
    pub message: String,
    pub http_status: u16,
}

/// Look up an error message by key
pub fn get_error_message(key: &str, lang: Language) -> Option<LocalizedError> {
    MESSAGES.errors.get(key).map(|msg| LocalizedError {
        kind: msg.code.clone(),
        message: match lang {
            Language::English => msg.en.clone(),
            Language::Arabic => msg.ar.clone(),
        },
        http_status: msg.http_status,
    })
}

/// Look up a success message by key, falling back to the key itself
pub fn get_success_message(key: &str, lang: Language) -> String {
    match MESSAGES.success.get(key) {
        Some(msg) => match lang {
            Language::English => msg.en.clone(),
            Language::Arabic => msg.ar.clone(),
        },
        None => key.to_string(),
    }
}

/// Language for a request
///
/// Taken from `Accept-Language`; without a usable header the configured
/// default applies.
pub fn request_language(req: &HttpRequest) -> Language {
    let default = req
        .app_data::<web::Data<I18nConfig>>()
        .map(|config| config.default_language)
        .unwrap_or(Language::Arabic);

    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(|value| Language::from_accept_language(value, default))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_embedded_catalogue_is_complete() {
        let messages: Messages = toml::from_str(EMBEDDED_MESSAGES).unwrap();
        for key in [
            "email_required",
            "email_and_code_required",
            "invalid_request",
            "no_pending_code",
            "code_expired",
            "code_mismatch",
            "delivery_failed",
            "storage_fault",
            "internal_error",
            "not_found",
        ] {
            assert!(messages.errors.contains_key(key), "missing error message {}", key);
        }
        assert!(messages.success.contains_key("code_sent"));
        assert!(messages.success.contains_key("code_verified"));
    }

    #[test]
    fn test_override_file_merges_by_key() {
        let content = r#"
            [errors.code_expired]
            en = "Too late."
            ar = "متأخر."
            code = "CODE_EXPIRED"
            http_status = 400
        "#;
        let messages = load_messages(Some(content));

        assert_eq!(messages.errors["code_expired"].en, "Too late.");
        assert_eq!(messages.errors["code_mismatch"].code, "CODE_MISMATCH");
        assert!(messages.success.contains_key("code_sent"));
    }

    #[test]
    fn test_invalid_override_file_is_ignored() {
        let messages = load_messages(Some("[errors.code_expired]\nen = 1"));
        assert_eq!(
            messages.errors["code_expired"].en,
            "The verification code has expired. Please request a new code."
        );
        assert_eq!(messages.errors.len(), 10);
    }

    #[test]
    fn test_get_error_message() {
        let msg = get_error_message("code_expired", Language::Arabic).unwrap();
        assert_eq!(msg.kind, "CODE_EXPIRED");
        assert_eq!(msg.http_status, 400);
        assert_eq!(msg.message, "انتهت صلاحية رمز التحقق. يرجى طلب رمز جديد.");

        assert!(get_error_message("no_such_key", Language::English).is_none());
    }

    #[test]
    fn test_get_success_message() {
        assert_eq!(get_success_message("code_verified", Language::Arabic), "تم التحقق بنجاح!");
        assert_eq!(get_success_message("missing", Language::English), "missing");
    }

    #[test]
    fn test_request_language() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(request_language(&req), Language::Arabic);

        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "en-GB,en;q=0.8"))
            .to_http_request();
        assert_eq!(request_language(&req), Language::English);

        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "fr-FR"))
            .app_data(web::Data::new(I18nConfig {
                default_language: Language::English,
            }))
            .to_http_request();
        assert_eq!(request_language(&req), Language::English);
    }
}
