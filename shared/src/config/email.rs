//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Email delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Resend HTTP API
    #[default]
    Resend,
    /// Log messages instead of sending them
    Mock,
}

/// Email provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Provider selection
    #[serde(default)]
    pub provider: EmailProvider,

    /// Provider API key
    #[serde(default)]
    pub api_key: String,

    /// Provider API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Sender address
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Subject line of verification emails
    #[serde(default = "default_subject")]
    pub subject: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            from_address: default_from_address(),
            subject: default_subject(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    String::from("https://api.resend.com")
}

fn default_from_address() -> String {
    String::from("onboarding@cineluxea.shop")
}

fn default_subject() -> String {
    String::from("كود التحقق لحساب Cine Luxe")
}

fn default_timeout_secs() -> u64 {
    30
}
