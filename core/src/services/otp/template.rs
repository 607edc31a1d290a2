//! Verification email rendering

use super::types::EmailMessage;

/// Render the verification email carrying `code`
pub fn verification_email(to: &str, subject: &str, code: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html: format!("<h1>كود التفعيل الخاص بك هو: <strong>{}</strong></h1>", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_email_contains_code() {
        let message = verification_email("alice@example.com", "Your code", "482913");
        assert_eq!(message.to, "alice@example.com");
        assert_eq!(message.subject, "Your code");
        assert!(message.html.contains("<strong>482913</strong>"));
    }
}
