//! One-time passcode service module for email sign-in
//!
//! This module provides the verification code workflow:
//! - Code generation, storage, and delivery by email
//! - Code verification with expiry enforcement and single-use consumption
//! - Per-email serialization of the store read-modify-write cycles
//! - Injection points for the store, the email sender, and the clock

mod clock;
mod config;
mod locks;
mod service;
mod template;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::OtpServiceConfig;
pub use locks::EmailLocks;
pub use service::{mask_email, OtpService};
pub use template::verification_email;
pub use traits::{CodeStore, EmailSender};
pub use types::{EmailMessage, IssueCodeResult, VerifyCodeResult};
