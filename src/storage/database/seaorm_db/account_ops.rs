use crate::core::models::{Account, NewAccount};
use crate::utils::error::{PlatformError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create a new account
    ///
    /// Duplicate emails surface as `Conflict`; the caller must not leak which
    /// field collided.
    pub async fn create_account(&self, account: NewAccount) -> Result<Account> {
        debug!("Creating account: {}", account.email);

        let id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();
        let active_model = user::Model::from_new_account(&account, id, now);

        match entities::User::insert(active_model).exec(&self.db).await {
            Ok(_) => Ok(Account {
                id,
                full_name: account.full_name,
                email: account.email,
                password_hash: account.password_hash,
                role: account.role,
                college_id: account.college_id,
                approval_status: account.approval_status,
                is_email_verified: false,
                email_verification_token: None,
                email_verification_expires: None,
                password_reset_token: None,
                password_reset_expires: None,
                created_at: now,
                updated_at: now,
            }),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(PlatformError::conflict("account already exists"))
                }
                _ => Err(PlatformError::Database(e)),
            },
        }
    }

    /// Find account by email
    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        debug!("Finding account by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(user_model.map(|model| model.to_domain_account()))
    }

    /// Find account by ID
    pub async fn find_account_by_id(&self, account_id: uuid::Uuid) -> Result<Option<Account>> {
        debug!("Finding account by ID: {}", account_id);

        let user_model = entities::User::find_by_id(account_id)
            .one(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(user_model.map(|model| model.to_domain_account()))
    }

    /// Store a fresh hashed verification OTP, replacing any outstanding one
    pub async fn set_email_verification_details(
        &self,
        account_id: uuid::Uuid,
        hashed_otp: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<()> {
        debug!("Storing verification OTP for account: {}", account_id);

        let mut account: user::ActiveModel = self.require_account(account_id).await?.into();

        account.email_verification_token = Set(Some(hashed_otp.to_string()));
        account.email_verification_expires = Set(Some(expires_at.into()));
        account.updated_at = Set(chrono::Utc::now().into());

        account
            .update(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(())
    }

    /// Mark the email verified and invalidate the verification token
    pub async fn mark_email_verified(&self, account_id: uuid::Uuid) -> Result<Account> {
        debug!("Verifying email for account: {}", account_id);

        let mut account: user::ActiveModel = self.require_account(account_id).await?.into();

        account.is_email_verified = Set(true);
        account.email_verification_token = Set(None);
        account.email_verification_expires = Set(None);
        account.updated_at = Set(chrono::Utc::now().into());

        let updated = account
            .update(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(updated.to_domain_account())
    }

    /// Store a fresh hashed reset OTP, replacing any outstanding one
    pub async fn set_password_reset_details(
        &self,
        account_id: uuid::Uuid,
        hashed_otp: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<()> {
        debug!("Storing password reset OTP for account: {}", account_id);

        let mut account: user::ActiveModel = self.require_account(account_id).await?.into();

        account.password_reset_token = Set(Some(hashed_otp.to_string()));
        account.password_reset_expires = Set(Some(expires_at.into()));
        account.updated_at = Set(chrono::Utc::now().into());

        account
            .update(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(())
    }

    /// Drop the outstanding reset token
    pub async fn clear_password_reset_details(&self, account_id: uuid::Uuid) -> Result<()> {
        debug!("Clearing password reset OTP for account: {}", account_id);

        let mut account: user::ActiveModel = self.require_account(account_id).await?.into();

        account.password_reset_token = Set(None);
        account.password_reset_expires = Set(None);
        account.updated_at = Set(chrono::Utc::now().into());

        account
            .update(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(())
    }

    /// Replace the stored password hash
    pub async fn update_password_hash(
        &self,
        account_id: uuid::Uuid,
        password_hash: &str,
    ) -> Result<()> {
        debug!("Updating password for account: {}", account_id);

        let mut account: user::ActiveModel = self.require_account(account_id).await?.into();

        account.password_hash = Set(password_hash.to_string());
        account.updated_at = Set(chrono::Utc::now().into());

        account
            .update(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(())
    }

    async fn require_account(&self, account_id: uuid::Uuid) -> Result<user::Model> {
        entities::User::find_by_id(account_id)
            .one(&self.db)
            .await
            .map_err(PlatformError::Database)?
            .ok_or_else(|| PlatformError::not_found("Account not found"))
    }
}
