//! Input validation utilities

use crate::utils::error::{PlatformError, Result};
use uuid::Uuid;

/// Request input validation
///
/// Rules are intentionally permissive: registration requires the fields to be
/// present, and proof of address ownership comes from the OTP round trip, not
/// from format checks.
pub struct DataValidator;

impl DataValidator {
    /// Validate an email address field
    pub fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(PlatformError::Validation(
                "Email cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a password field
    pub fn validate_password(password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(PlatformError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the college association required for registration
    pub fn validate_college_id(college_id: Option<Uuid>) -> Result<Uuid> {
        match college_id {
            Some(id) if !id.is_nil() => Ok(id),
            _ => Err(PlatformError::Validation(
                "A college id is required".to_string(),
            )),
        }
    }
}
