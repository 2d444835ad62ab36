//! Authentication and account-lifecycle state machine
//!
//! This module governs the legal transitions between registration, email
//! verification, admin approval, and password reset, and issues session
//! tokens once an account clears every gate.

pub mod jwt;
pub mod otp;

mod login;
mod password;
mod registration;
mod verification;

#[cfg(test)]
mod tests;

pub use login::Principal;
pub use registration::Registration;
pub use verification::EmailVerification;

use crate::config::AuthConfig;
use crate::core::models::{Account, SuperAdmin};
use crate::email::OtpNotifier;
use crate::storage::AccountStore;
use crate::utils::crypto;
use crate::utils::error::Result;
use jwt::{SessionClaims, TokenIssuer};
use otp::OneTimeCode;
use std::sync::Arc;
use tracing::info;

/// Main authentication service
///
/// Holds the process-wide store handle and notifier; every operation reads
/// and writes through the store in a single logical unit, so no state is
/// cached here between requests.
#[derive(Clone)]
pub struct AuthService {
    /// Account store (sole source of truth)
    store: Arc<dyn AccountStore>,
    /// Out-of-band code delivery
    notifier: Arc<dyn OtpNotifier>,
    /// Session token issuer
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        config: &AuthConfig,
        store: Arc<dyn AccountStore>,
        notifier: Arc<dyn OtpNotifier>,
    ) -> Result<Self> {
        info!("Initializing authentication service");

        let tokens = Arc::new(TokenIssuer::new(config)?);

        Ok(Self {
            store,
            notifier,
            tokens,
        })
    }

    /// Get the token issuer
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    fn issue_account_token(&self, account: &Account) -> Result<String> {
        self.tokens.issue(&SessionClaims::for_account(account))
    }

    fn issue_admin_token(&self, admin: &SuperAdmin) -> Result<String> {
        self.tokens.issue(&SessionClaims::for_admin(admin))
    }

    /// Mint a verification OTP, persist its hash, and dispatch delivery
    ///
    /// The newest code overwrites any outstanding one. Delivery is
    /// fire-and-forget and cannot fail the calling operation.
    async fn issue_verification_otp(&self, account: &Account) -> Result<()> {
        let otp = OneTimeCode::generate();
        let hashed = crypto::hash_secret(&otp.code)?;

        self.store
            .set_email_verification_details(account.id, &hashed, otp.expires_at)
            .await?;

        self.notifier.deliver(&account.email, &otp.code);
        Ok(())
    }

    /// Mint a password-reset OTP, persist its hash, and dispatch delivery
    async fn issue_reset_otp(&self, account: &Account) -> Result<()> {
        let otp = OneTimeCode::generate();
        let hashed = crypto::hash_secret(&otp.code)?;

        self.store
            .set_password_reset_details(account.id, &hashed, otp.expires_at)
            .await?;

        self.notifier.deliver(&account.email, &otp.code);
        Ok(())
    }
}
