//! Verification Code Store Module
//!
//! Implementations of the core `CodeStore` trait:
//!
//! - **JSON file**: one JSON document holding every pending record, rewritten
//!   atomically on each change and surviving restarts
//! - **Memory**: process-local map for development and tests

use async_trait::async_trait;
use cl_core::{CodeStore, VerificationRecord};
use cl_shared::{StoreBackend, StoreConfig};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileCodeStore;
pub use memory::MemoryCodeStore;

/// Code store selected from configuration
pub enum ConfiguredCodeStore {
    File(JsonFileCodeStore),
    Memory(MemoryCodeStore),
}

impl ConfiguredCodeStore {
    /// Create the store named by `config.backend`
    pub fn from_config(config: &StoreConfig) -> Self {
        match config.backend {
            StoreBackend::File => {
                tracing::info!(
                    backend = "file",
                    path = %config.path,
                    read_failure_policy = ?config.read_failure_policy,
                    "Using JSON file verification code store"
                );
                Self::File(JsonFileCodeStore::from_config(config))
            }
            StoreBackend::Memory => {
                tracing::warn!(
                    backend = "memory",
                    "Using in-memory verification code store; pending codes are lost on restart"
                );
                Self::Memory(MemoryCodeStore::new())
            }
        }
    }
}

#[async_trait]
impl CodeStore for ConfiguredCodeStore {
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        match self {
            Self::File(store) => store.get(email).await,
            Self::Memory(store) => store.get(email).await,
        }
    }

    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        match self {
            Self::File(store) => store.put(email, record).await,
            Self::Memory(store) => store.put(email, record).await,
        }
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        match self {
            Self::File(store) => store.delete(email).await,
            Self::Memory(store) => store.delete(email).await,
        }
    }
}
