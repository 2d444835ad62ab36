//! Secret hashing and verification using Argon2
//!
//! Applies uniformly to account passwords and to one-time codes: both are
//! hashed before storage, and the plaintext OTP is only ever handed to the
//! notifier.

use crate::utils::error::{PlatformError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a secret using Argon2
pub fn hash_secret(secret: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| PlatformError::crypto(format!("Failed to hash secret: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a secret against its stored hash
///
/// Returns `Ok(false)` on a plain mismatch; errors only when the stored hash
/// is structurally invalid.
pub fn verify_secret(secret: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PlatformError::crypto(format!("Failed to parse stored hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(secret.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PlatformError::crypto(format!(
            "Secret verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_secret_produces_hash() {
        let hash = hash_secret("my-secure-password").unwrap();

        assert!(!hash.is_empty());
        // Argon2 hashes start with $argon2
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hash_secret_unique_each_time() {
        let hash1 = hash_secret("same-password").unwrap();
        let hash2 = hash_secret("same-password").unwrap();

        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_secret_correct() {
        let hash = hash_secret("correct-password").unwrap();

        assert!(verify_secret("correct-password", &hash).unwrap());
    }

    #[test]
    fn test_verify_secret_incorrect() {
        let hash = hash_secret("original-password").unwrap();

        assert!(!verify_secret("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_verify_secret_malformed_hash() {
        let result = verify_secret("password", "not-a-valid-hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_secret_case_sensitive() {
        let hash = hash_secret("CaseSensitive").unwrap();

        assert!(!verify_secret("casesensitive", &hash).unwrap());
    }

    #[test]
    fn test_otp_round_trip() {
        let hash = hash_secret("0042").unwrap();

        assert!(verify_secret("0042", &hash).unwrap());
        assert!(!verify_secret("0043", &hash).unwrap());
    }
}
