//! In-memory verification code store

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use cl_core::{CodeStore, VerificationRecord};

/// Process-local code store
///
/// Records live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCodeStore {
    records: RwLock<HashMap<String, VerificationRecord>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        Ok(self.records.read().await.get(email).cloned())
    }

    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        self.records
            .write()
            .await
            .insert(email.to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        self.records.write().await.remove(email);
        Ok(())
    }
}
