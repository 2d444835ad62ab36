//! One-time code generation

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::rngs::OsRng;

/// How long an issued code stays usable
pub const OTP_VALIDITY_MINUTES: i64 = 10;

/// A freshly generated one-time code with its expiry timestamp
///
/// Generation is pure: the caller hashes the code before persisting it and
/// hands the plaintext to the notifier exactly once.
#[derive(Debug, Clone)]
pub struct OneTimeCode {
    /// 4-digit zero-padded code
    pub code: String,
    /// Absolute expiry (issuance + 10 minutes)
    pub expires_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// Generate a new code from the OS random source
    pub fn generate() -> Self {
        let value: u32 = OsRng.gen_range(0..10_000);

        Self {
            code: format!("{:04}", value),
            expires_at: Utc::now() + Duration::minutes(OTP_VALIDITY_MINUTES),
        }
    }
}
