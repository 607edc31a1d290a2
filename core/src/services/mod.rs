//! Business services containing domain logic and use cases.

pub mod otp;

pub use otp::{
    mask_email, Clock, CodeStore, EmailLocks, EmailMessage, EmailSender, IssueCodeResult,
    ManualClock, OtpService, OtpServiceConfig, SystemClock, VerifyCodeResult,
};
