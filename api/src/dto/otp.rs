use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Recipient address, used verbatim as the store key
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    /// Code as typed by the user; compared exactly
    ///
    /// Anything other than a JSON string counts as a missing code.
    #[serde(default, deserialize_with = "text_only")]
    #[validate(required, length(min = 1))]
    pub code: Option<String>,
}

fn text_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Field>::deserialize(deserializer)? {
        Some(Field::Text(text)) => Some(text),
        Some(Field::Other(_)) | None => None,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_code_validation() {
        let missing: SendCodeRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.validate().is_err());

        let empty = SendCodeRequest { email: Some(String::new()) };
        assert!(empty.validate().is_err());

        let ok = SendCodeRequest { email: Some("alice@example.com".into()) };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_verify_code_validation() {
        let missing_code: VerifyCodeRequest =
            serde_json::from_str(r#"{"email":"alice@example.com"}"#).unwrap();
        assert!(missing_code.validate().is_err());

        let ok: VerifyCodeRequest =
            serde_json::from_str(r#"{"email":"alice@example.com","code":"482913"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_non_string_code_counts_as_missing() {
        for body in [
            r#"{"email":"alice@example.com","code":482913}"#,
            r#"{"email":"alice@example.com","code":null}"#,
            r#"{"email":"alice@example.com","code":["482913"]}"#,
        ] {
            let request: VerifyCodeRequest = serde_json::from_str(body).unwrap();
            assert_eq!(request.code, None, "{}", body);
            assert!(request.validate().is_err());
        }
    }
}
