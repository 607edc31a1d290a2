//! JSON file verification code store
//!
//! All pending records live in a single JSON object keyed by email:
//!
//! ```json
//! {"alice@example.com": {"code": "482913", "expires": 1700000300000}}
//! ```
//!
//! Every change rewrites the whole document. Writes go to a sibling temp file
//! that is synced and then renamed over the target, so a crash mid-write
//! leaves either the old or the new document on disk.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, error};

use cl_core::{mask_email, CodeStore, VerificationRecord};
use cl_shared::{ReadFailurePolicy, StoreConfig};

use crate::InfrastructureError;

type Document = BTreeMap<String, VerificationRecord>;

/// File-backed code store
pub struct JsonFileCodeStore {
    path: PathBuf,
    read_failure_policy: ReadFailurePolicy,
    /// Held across each read-modify-write of the document
    lock: Mutex<()>,
}

impl JsonFileCodeStore {
    /// Create a store over the document at `path`
    ///
    /// The file is not touched until the first operation. A missing file is
    /// an empty store.
    pub fn new(path: impl Into<PathBuf>, read_failure_policy: ReadFailurePolicy) -> Self {
        Self {
            path: path.into(),
            read_failure_policy,
            lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.path, config.read_failure_policy)
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the pending record for `email`
    pub async fn find(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, InfrastructureError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        Ok(document.remove(email))
    }

    /// Insert or replace the record for `email`
    pub async fn upsert(
        &self,
        email: &str,
        record: &VerificationRecord,
    ) -> Result<(), InfrastructureError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        document.insert(email.to_string(), record.clone());
        self.save(&document).await
    }

    /// Remove the record for `email`; absent keys leave the file untouched
    pub async fn remove(&self, email: &str) -> Result<(), InfrastructureError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        if document.remove(email).is_none() {
            return Ok(());
        }
        self.save(&document).await
    }

    async fn load(&self) -> Result<Document, InfrastructureError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return self.on_read_failure(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::new());
        }

        match serde_json::from_slice(&bytes) {
            Ok(document) => Ok(document),
            Err(e) => self.on_read_failure(e.into()),
        }
    }

    fn on_read_failure(&self, error: InfrastructureError) -> Result<Document, InfrastructureError> {
        match self.read_failure_policy {
            ReadFailurePolicy::FailOpen => {
                error!(
                    path = %self.path.display(),
                    error = %error,
                    event = "code_store_read_failed",
                    "Unreadable verification code store, treating as empty"
                );
                Ok(Document::new())
            }
            ReadFailurePolicy::FailClosed => {
                error!(
                    path = %self.path.display(),
                    error = %error,
                    event = "code_store_read_failed",
                    "Unreadable verification code store"
                );
                Err(error)
            }
        }
    }

    async fn save(&self, document: &Document) -> Result<(), InfrastructureError> {
        let bytes = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.replace_with(&temp_path, &bytes).await {
            // The temp file may be partial; the live document is untouched
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(
            path = %self.path.display(),
            records = document.len(),
            "Verification code store written"
        );
        Ok(())
    }

    async fn replace_with(&self, temp_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(temp_path, &self.path).await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CodeStore for JsonFileCodeStore {
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        self.find(email).await.map_err(|e| e.to_string())
    }

    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        self.upsert(email, record).await.map_err(|e| {
            error!(email = %mask_email(email), error = %e, "Failed to write verification code");
            e.to_string()
        })
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        self.remove(email).await.map_err(|e| {
            error!(email = %mask_email(email), error = %e, "Failed to remove verification code");
            e.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn temp_store(policy: ReadFailurePolicy) -> JsonFileCodeStore {
        let path = std::env::temp_dir()
            .join(format!("cl-infra-{}", uuid::Uuid::new_v4()))
            .join("temp_codes.json");
        JsonFileCodeStore::new(path, policy)
    }

    fn record(code: &str, expires: i64) -> VerificationRecord {
        VerificationRecord::new(code, Utc.timestamp_millis_opt(expires).unwrap())
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let store = temp_store(ReadFailurePolicy::FailClosed);
        assert!(store.get("alice@example.com").await.unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_put_writes_legacy_layout() {
        let store = temp_store(ReadFailurePolicy::FailOpen);
        store
            .put("alice@example.com", &record("482913", 1_700_000_300_000))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let expected = serde_json::json!({
            "alice@example.com": {"code": "482913", "expires": 1_700_000_300_000i64}
        });
        assert_eq!(json, expected);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_reads_document_written_elsewhere() {
        let store = temp_store(ReadFailurePolicy::FailClosed);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            r#"{"bob@example.com":{"code":"123456","expires":300000}}"#,
        )
        .unwrap();

        let found = store.get("bob@example.com").await.unwrap();
        assert_eq!(found, Some(record("123456", 300_000)));
    }

    #[tokio::test]
    async fn test_put_replaces_and_delete_removes() {
        let store = temp_store(ReadFailurePolicy::FailOpen);
        store.put("alice@example.com", &record("111111", 1)).await.unwrap();
        store.put("bob@example.com", &record("222222", 2)).await.unwrap();
        store.put("alice@example.com", &record("333333", 3)).await.unwrap();

        assert_eq!(store.get("alice@example.com").await.unwrap().unwrap().code, "333333");

        store.delete("alice@example.com").await.unwrap();
        store.delete("alice@example.com").await.unwrap();
        assert!(store.get("alice@example.com").await.unwrap().is_none());
        assert!(store.get("bob@example.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_file_fail_open() {
        let store = temp_store(ReadFailurePolicy::FailOpen);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.get("alice@example.com").await.unwrap().is_none());

        // The next write replaces the corrupt document
        store.put("alice@example.com", &record("482913", 1)).await.unwrap();
        assert!(store.get("alice@example.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_file_fail_closed() {
        let store = temp_store(ReadFailurePolicy::FailClosed);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.get("alice@example.com").await.is_err());
        assert!(store.put("alice@example.com", &record("482913", 1)).await.is_err());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn test_failed_write_removes_temp_file() {
        let store = temp_store(ReadFailurePolicy::FailOpen);
        // A non-empty directory where the document belongs makes the rename fail
        std::fs::create_dir_all(store.path().join("occupied")).unwrap();

        assert!(store.put("alice@example.com", &record("482913", 1)).await.is_err());
        assert!(!store.temp_path().exists());
        assert!(store.path().is_dir());
    }

    #[tokio::test]
    async fn test_blank_file_is_empty() {
        let store = temp_store(ReadFailurePolicy::FailClosed);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "  \n").unwrap();

        assert!(store.get("alice@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_puts_are_not_lost() {
        let store = std::sync::Arc::new(temp_store(ReadFailurePolicy::FailClosed));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .put(&format!("user{}@example.com", i), &record("482913", i))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        for i in 0..20 {
            let email = format!("user{}@example.com", i);
            assert!(store.get(&email).await.unwrap().is_some(), "lost {}", email);
        }
    }
}
