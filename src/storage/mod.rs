//! Storage layer for the platform
//!
//! This module provides data persistence behind the [`AccountStore`]
//! contract. The store is the sole source of truth across request-scoped
//! executions; it is injected at startup and shared for the process
//! lifetime.

/// Database storage module
pub mod database;

use crate::core::models::{Account, NewAccount, SuperAdmin};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Operations the account-lifecycle core requires from its store
///
/// Administrators and regular accounts live in disjoint email namespaces,
/// hence the separate lookup methods.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create an account; duplicate identities surface as `Conflict`
    async fn create_account(&self, account: NewAccount) -> Result<Account>;

    /// Find a regular account by email
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Find a regular account by id
    async fn find_account_by_id(&self, id: Uuid) -> Result<Option<Account>>;

    /// Find an administrator by email
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<SuperAdmin>>;

    /// Find an administrator by id
    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<SuperAdmin>>;

    /// Store a fresh hashed verification OTP, replacing any outstanding one
    async fn set_email_verification_details(
        &self,
        id: Uuid,
        hashed_otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Mark the email verified and invalidate the verification token
    ///
    /// Returns the updated account so callers can read the approval status
    /// as of the verification write.
    async fn mark_email_verified(&self, id: Uuid) -> Result<Account>;

    /// Store a fresh hashed reset OTP, replacing any outstanding one
    async fn set_password_reset_details(
        &self,
        id: Uuid,
        hashed_otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Drop the outstanding reset token after a successful password reset
    async fn clear_password_reset_details(&self, id: Uuid) -> Result<()>;

    /// Replace the stored password hash
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<()>;

    /// Record a forum headship; callers treat failures as best-effort
    async fn link_forum_head(&self, user_id: Uuid, forum_id: Uuid) -> Result<()>;

    /// Forums the account heads, for profile responses
    async fn forum_ids_for_account(&self, user_id: Uuid) -> Result<Vec<Uuid>>;
}

/// Main storage layer backed by the relational database
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &crate::config::StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        Ok(Self { database })
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        self.database.health_check().await
    }
}

#[async_trait]
impl AccountStore for StorageLayer {
    async fn create_account(&self, account: NewAccount) -> Result<Account> {
        self.database.create_account(account).await
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.database.find_account_by_email(email).await
    }

    async fn find_account_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        self.database.find_account_by_id(id).await
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<SuperAdmin>> {
        self.database.find_admin_by_email(email).await
    }

    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<SuperAdmin>> {
        self.database.find_admin_by_id(id).await
    }

    async fn set_email_verification_details(
        &self,
        id: Uuid,
        hashed_otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        self.database
            .set_email_verification_details(id, hashed_otp, expires_at)
            .await
    }

    async fn mark_email_verified(&self, id: Uuid) -> Result<Account> {
        self.database.mark_email_verified(id).await
    }

    async fn set_password_reset_details(
        &self,
        id: Uuid,
        hashed_otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        self.database
            .set_password_reset_details(id, hashed_otp, expires_at)
            .await
    }

    async fn clear_password_reset_details(&self, id: Uuid) -> Result<()> {
        self.database.clear_password_reset_details(id).await
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<()> {
        self.database.update_password_hash(id, password_hash).await
    }

    async fn link_forum_head(&self, user_id: Uuid, forum_id: Uuid) -> Result<()> {
        self.database.link_forum_head(user_id, forum_id).await
    }

    async fn forum_ids_for_account(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        self.database.forum_ids_for_account(user_id).await
    }
}
