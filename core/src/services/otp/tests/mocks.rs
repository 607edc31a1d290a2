//! Mock implementations for testing the OTP service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::entities::VerificationRecord;
use crate::services::otp::{CodeStore, EmailMessage, EmailSender};

// Mock code store with switchable failures per operation
#[derive(Default)]
pub struct MockCodeStore {
    pub records: Mutex<HashMap<String, VerificationRecord>>,
    pub fail_get: AtomicBool,
    pub fail_put: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl MockCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, email: &str) -> Option<VerificationRecord> {
        self.records.lock().unwrap().get(email).cloned()
    }

    pub fn insert(&self, email: &str, record: VerificationRecord) {
        self.records.lock().unwrap().insert(email.to_string(), record);
    }
}

#[async_trait]
impl CodeStore for MockCodeStore {
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err("store read error".to_string());
        }
        Ok(self.record(email))
    }

    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        if self.fail_put.load(Ordering::SeqCst) {
            return Err("store write error".to_string());
        }
        self.insert(email, record.clone());
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err("store write error".to_string());
        }
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}

// Mock email sender capturing every message it is asked to send
#[derive(Default)]
pub struct MockEmailSender {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub should_fail: AtomicBool,
}

impl MockEmailSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(should_fail),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Code carried by the last message sent to `email`
    pub fn last_code(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|message| message.to == email)
            .and_then(|message| extract_code(&message.html))
    }
}

pub fn extract_code(html: &str) -> Option<String> {
    let start = html.find("<strong>")? + "<strong>".len();
    let end = html[start..].find("</strong>")? + start;
    Some(html[start..end].to_string())
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("email provider error".to_string());
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}
