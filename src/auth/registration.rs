//! Account registration and verification-code reissue

use super::AuthService;
use crate::core::models::{NewAccount, UserRole};
use crate::utils::crypto;
use crate::utils::error::{PlatformError, Result};
use crate::utils::validation::DataValidator;
use tracing::{info, warn};
use uuid::Uuid;

/// Fields submitted when registering an account
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub college_id: Option<Uuid>,
    pub forum_id: Option<Uuid>,
}

impl AuthService {
    /// Register a new account and issue its first verification OTP
    ///
    /// Succeeds regardless of delivery outcome; only validation and store
    /// failures surface to the caller.
    pub async fn register(&self, registration: Registration) -> Result<()> {
        info!("Registration attempt: {}", registration.email);

        let role: UserRole = registration
            .role
            .parse()
            .ok()
            .filter(UserRole::is_registrable)
            .ok_or_else(|| PlatformError::validation("Invalid role provided"))?;

        DataValidator::validate_email(&registration.email)?;
        DataValidator::validate_password(&registration.password)?;
        let college_id = DataValidator::validate_college_id(registration.college_id)?;

        let password_hash = crypto::hash_secret(&registration.password)?;

        let account = self
            .store
            .create_account(NewAccount {
                full_name: registration.full_name,
                email: registration.email,
                password_hash,
                role,
                college_id,
                approval_status: role.initial_approval_status(),
            })
            .await?;

        if role == UserRole::ForumHead {
            if let Some(forum_id) = registration.forum_id {
                // Best effort: a failed link never fails the registration
                if let Err(e) = self.store.link_forum_head(account.id, forum_id).await {
                    warn!("Failed to link forum head for {}: {}", account.id, e);
                }
            }
        }

        self.issue_verification_otp(&account).await?;

        info!("Account registered: {}", account.id);
        Ok(())
    }

    /// Reissue a verification OTP, invalidating any outstanding one
    ///
    /// A miss answers exactly like a hit so the endpoint cannot be used to
    /// probe for account existence.
    pub async fn resend_verification_otp(&self, email: &str) -> Result<()> {
        let Some(account) = self.store.find_account_by_email(email).await? else {
            return Ok(());
        };

        self.issue_verification_otp(&account).await
    }
}
