//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language preference for internationalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Pick a language from an `Accept-Language` header value
    ///
    /// Only the first listed language is considered; anything other than
    /// English or Arabic resolves to `default`.
    pub fn from_accept_language(header: &str, default: Language) -> Self {
        let primary = header
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if primary.starts_with("en") {
            Language::English
        } else if primary.starts_with("ar") {
            Language::Arabic
        } else {
            default
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ar" | "ara" | "arabic" | "العربية" => Ok(Language::Arabic),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_header() {
        assert_eq!(
            Language::from_accept_language("en-US,en;q=0.9", Language::Arabic),
            Language::English
        );
        assert_eq!(
            Language::from_accept_language("ar-EG,ar;q=0.9", Language::English),
            Language::Arabic
        );
        assert_eq!(
            Language::from_accept_language("fr-FR", Language::Arabic),
            Language::Arabic
        );
        assert_eq!(
            Language::from_accept_language("EN-gb", Language::Arabic),
            Language::English
        );
        assert_eq!(Language::from_accept_language("", Language::English), Language::English);
    }

    #[test]
    fn test_language_properties() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Arabic.code(), "ar");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Arabic".parse::<Language>().unwrap(), Language::Arabic);
        assert!("zh".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ar\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
