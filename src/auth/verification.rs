//! Email verification

use super::AuthService;
use crate::core::models::ApprovalStatus;
use crate::utils::crypto;
use crate::utils::error::{PlatformError, Result};
use chrono::Utc;
use tracing::info;

/// Outcome of a successful email verification
///
/// Verification and the approval check are a single unit: the verdict
/// reflects the approval status read from the verification write itself.
#[derive(Debug, Clone)]
pub enum EmailVerification {
    /// Verified and approved: a session token was issued
    LoggedIn {
        /// Signed session token
        token: String,
    },
    /// Verified, but still awaiting college-admin approval
    PendingApproval,
}

impl AuthService {
    /// Verify an email with its OTP and, when the account is approved,
    /// open a session
    ///
    /// Absent accounts, already-verified accounts, missing tokens, and
    /// expired tokens all collapse to the same external signal.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<EmailVerification> {
        info!("Email verification attempt: {}", email);

        let account = self
            .store
            .find_account_by_email(email)
            .await?
            .ok_or(PlatformError::InvalidOrExpiredOtp)?;

        if account.is_email_verified {
            return Err(PlatformError::InvalidOrExpiredOtp);
        }

        if !account.has_live_verification_token(Utc::now()) {
            return Err(PlatformError::InvalidOrExpiredOtp);
        }

        let stored = account
            .email_verification_token
            .as_deref()
            .ok_or(PlatformError::InvalidOrExpiredOtp)?;

        if !crypto::verify_secret(code, stored)? {
            return Err(PlatformError::InvalidOtp);
        }

        let updated = self.store.mark_email_verified(account.id).await?;

        if updated.approval_status != ApprovalStatus::Approved {
            info!("Email verified, approval pending: {}", updated.id);
            return Ok(EmailVerification::PendingApproval);
        }

        let token = self.issue_account_token(&updated)?;

        info!("Email verified, session opened: {}", updated.id);
        Ok(EmailVerification::LoggedIn { token })
    }
}
