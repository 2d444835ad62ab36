//! Role-based login across the two principal namespaces

use super::AuthService;
use super::jwt::SessionClaims;
use crate::core::models::{Account, ApprovalStatus, SuperAdmin, UserRole};
use crate::utils::crypto;
use crate::utils::error::{PlatformError, Result};
use tracing::{info, warn};

/// A resolved login identity
///
/// Administrator and regular-account emails are disjoint namespaces sharing
/// one login entry point; lookups probe the administrator namespace first.
#[derive(Debug, Clone)]
pub enum Principal {
    /// Platform administrator
    Admin(SuperAdmin),
    /// Regular account
    Account(Account),
}

impl AuthService {
    /// Authenticate a principal and issue a session token
    ///
    /// Gate order for regular accounts is deliberate: existence, then
    /// verification, then approval, and only then the password comparison.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        if email.is_empty() || password.is_empty() {
            return Err(PlatformError::validation("Email and password are required"));
        }

        let principal = self
            .resolve_login_principal(email, password)
            .await?
            .ok_or(PlatformError::InvalidCredentials)?;

        let account = match principal {
            Principal::Admin(admin) => {
                info!("Administrator logged in: {}", admin.id);
                return self.issue_admin_token(&admin);
            }
            Principal::Account(account) => account,
        };

        if !account.is_email_verified {
            return Err(PlatformError::NotVerified {
                email: account.email,
            });
        }

        match account.approval_status {
            ApprovalStatus::Rejected => return Err(PlatformError::AccountRejected),
            ApprovalStatus::Pending => return Err(PlatformError::PendingApproval),
            ApprovalStatus::Approved => {}
        }

        if !crypto::verify_secret(password, &account.password_hash)? {
            warn!("Login attempt with invalid password for {}", account.id);
            return Err(PlatformError::InvalidCredentials);
        }

        info!("Account logged in: {}", account.id);
        self.issue_account_token(&account)
    }

    /// Ordered principal lookup for login
    ///
    /// An administrator match requires the password to verify; otherwise the
    /// chain falls through to the account namespace.
    async fn resolve_login_principal(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Principal>> {
        if let Some(admin) = self.store.find_admin_by_email(email).await? {
            if crypto::verify_secret(password, &admin.password_hash)? {
                return Ok(Some(Principal::Admin(admin)));
            }
        }

        Ok(self
            .store
            .find_account_by_email(email)
            .await?
            .map(Principal::Account))
    }

    /// Resolve the principal a verified claim set refers to
    pub async fn principal_for_claims(&self, claims: &SessionClaims) -> Result<Option<Principal>> {
        if claims.role == UserRole::SuperAdmin.to_string() {
            return Ok(self
                .store
                .find_admin_by_id(claims.id)
                .await?
                .map(Principal::Admin));
        }

        Ok(self
            .store
            .find_account_by_id(claims.id)
            .await?
            .map(Principal::Account))
    }
}
