//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `store` - Verification code store backend and read failure policy
//! - `otp` - One-time passcode lifetime and issuance ordering
//! - `email` - Outbound email provider settings
//!
//! Configuration is layered: built-in defaults, then `config/default.toml`,
//! then `config/{environment}.toml`, then `CINELUXE__*` environment variables.

pub mod email;
pub mod environment;
pub mod otp;
pub mod server;
pub mod store;

use ::config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Language;

// Re-export commonly used types
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::{OtpConfig, MAX_CODE_TTL_SECONDS};
pub use server::{CorsConfig, ServerConfig};
pub use store::{ReadFailurePolicy, StoreBackend, StoreConfig};

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "CINELUXE";

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Language used when the request carries no usable `Accept-Language`
    #[serde(default = "default_language")]
    pub default_language: Language,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> Language {
    Language::Arabic
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Verification code store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// One-time passcode configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Email provider configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Internationalization configuration
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            store: StoreConfig::default(),
            otp: OtpConfig::default(),
            email: EmailConfig::default(),
            i18n: I18nConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            email: EmailConfig {
                provider: EmailProvider::Mock,
                ..Default::default()
            },
            logging: LoggingConfig::for_environment(Environment::Development),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 3001),
            email: EmailConfig {
                provider: EmailProvider::Resend,
                ..Default::default()
            },
            logging: LoggingConfig::for_environment(Environment::Production),
            ..Default::default()
        }
    }

    /// Defaults for the environment named by `ENVIRONMENT`/`ENV`/`RUST_ENV`
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load the layered configuration
    ///
    /// Sources, later ones winning:
    /// 1. defaults for the detected environment
    /// 2. `config/default.toml` (optional)
    /// 3. `config/{environment}.toml` (optional)
    /// 4. `CINELUXE__SECTION__KEY` environment variables
    ///
    /// `RESEND_API_KEY` is honoured when no API key was configured otherwise.
    /// Values outside their accepted range are rejected.
    pub fn load() -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        let defaults = Self::for_environment(env);

        let mut config: Self = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if config.email.api_key.is_empty() {
            if let Ok(key) = std::env::var("RESEND_API_KEY") {
                config.email.api_key = key;
            }
        }

        config.check()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn check(&self) -> Result<(), ConfigError> {
        self.otp
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid otp configuration: {}", e)))
    }
}
