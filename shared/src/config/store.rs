//! Verification code store configuration

use serde::{Deserialize, Serialize};

/// Backing technology of the verification code store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Whole-document JSON file on disk
    #[default]
    File,
    /// Process-local map, lost on restart
    Memory,
}

/// What a store read does when the backing document is corrupt or unreadable
///
/// A missing document is always an empty store; this policy only applies to
/// documents that exist but cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadFailurePolicy {
    /// Log the fault and treat the store as empty
    #[default]
    FailOpen,
    /// Report the fault to the caller
    FailClosed,
}

/// Store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StoreBackend,

    /// Path of the JSON document (file backend only)
    #[serde(default = "default_path")]
    pub path: String,

    /// Behaviour on corrupt or unreadable documents
    #[serde(default)]
    pub read_failure_policy: ReadFailurePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_path(),
            read_failure_policy: ReadFailurePolicy::default(),
        }
    }
}

fn default_path() -> String {
    String::from("temp_codes.json")
}
