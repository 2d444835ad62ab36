//! Out-of-band delivery of one-time codes
//!
//! The notifier is fire-and-forget by contract: delivery latency and
//! failures are invisible to the request that triggered them, and there is
//! no retry here. Retries, if ever wanted, belong to the mail
//! infrastructure.

mod smtp;
mod templates;

pub use smtp::SmtpNotifier;
pub use templates::otp_email_body;

/// Contract for delivering a one-time code to an account's email address
#[cfg_attr(test, mockall::automock)]
pub trait OtpNotifier: Send + Sync {
    /// Dispatch a code for delivery; the caller consumes no result
    fn deliver(&self, recipient: &str, code: &str);
}
