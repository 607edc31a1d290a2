//! Per-email mutual exclusion
//!
//! Issue and verify both run a read-modify-write cycle against the code
//! store. Holding the email's lock for the whole cycle keeps two requests for
//! the same email from interleaving.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of async locks keyed by email
#[derive(Debug, Default)]
pub struct EmailLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl EmailLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `email`
    ///
    /// The returned guard releases the lock on drop. Entries nobody holds or
    /// waits on are pruned on each call.
    pub async fn acquire(&self, email: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(email.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of emails with a live lock entry
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
