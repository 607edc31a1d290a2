pub mod health;
pub mod otp;
