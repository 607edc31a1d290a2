//! One-time passcode route handlers
//!
//! - `POST /send-code`: issue a code and email it
//! - `POST /verify-code`: check a submitted code

use std::sync::Arc;

use cl_core::{CodeStore, EmailSender, OtpService};

pub mod send_code;
pub mod verify_code;

pub use send_code::send_code;
pub use verify_code::verify_code;

/// Application state that holds shared services
pub struct AppState<S, E>
where
    S: CodeStore,
    E: EmailSender,
{
    pub otp_service: Arc<OtpService<S, E>>,
}

impl<S, E> AppState<S, E>
where
    S: CodeStore,
    E: EmailSender,
{
    pub fn new(otp_service: Arc<OtpService<S, E>>) -> Self {
        Self { otp_service }
    }
}
