//! Password reset via one-time codes

use super::AuthService;
use crate::core::models::Account;
use crate::utils::crypto;
use crate::utils::error::{PlatformError, Result};
use crate::utils::validation::DataValidator;
use chrono::Utc;
use tracing::info;

impl AuthService {
    /// Issue a password-reset OTP, invalidating any outstanding one
    ///
    /// A miss answers exactly like a hit so the endpoint cannot be used to
    /// probe for account existence.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let Some(account) = self.store.find_account_by_email(email).await? else {
            return Ok(());
        };

        self.issue_reset_otp(&account).await
    }

    /// Check a reset OTP without consuming it
    ///
    /// Lets a client confirm the code before committing to a password
    /// change; no state changes on success.
    pub async fn verify_reset_otp(&self, email: &str, code: &str) -> Result<()> {
        self.reset_eligible_account(email, code).await.map(|_| ())
    }

    /// Re-validate the reset OTP and replace the password hash
    pub async fn reset_password(&self, email: &str, code: &str, new_password: &str) -> Result<()> {
        DataValidator::validate_password(new_password)?;

        let account = self.reset_eligible_account(email, code).await?;

        let password_hash = crypto::hash_secret(new_password)?;
        self.store
            .update_password_hash(account.id, &password_hash)
            .await?;

        // Invalidate the consumed OTP so it cannot authorize a second reset
        self.store.clear_password_reset_details(account.id).await?;

        info!("Password reset for account: {}", account.id);
        Ok(())
    }

    /// Find the account and validate its outstanding reset OTP
    async fn reset_eligible_account(&self, email: &str, code: &str) -> Result<Account> {
        let account = self
            .store
            .find_account_by_email(email)
            .await?
            .ok_or(PlatformError::InvalidOrExpiredOtp)?;

        if !account.has_live_reset_token(Utc::now()) {
            return Err(PlatformError::InvalidOrExpiredOtp);
        }

        let stored = account
            .password_reset_token
            .as_deref()
            .ok_or(PlatformError::InvalidOrExpiredOtp)?;

        if !crypto::verify_secret(code, stored)? {
            return Err(PlatformError::InvalidOtp);
        }

        Ok(account)
    }
}
