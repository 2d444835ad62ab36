//! Shared test infrastructure
//!
//! Provides an in-memory account store and a recording notifier so the
//! full account-lifecycle flows can run without a database or an SMTP
//! server.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use unibook_rs::auth::AuthService;
use unibook_rs::config::AuthConfig;
use unibook_rs::core::models::{Account, ApprovalStatus, NewAccount, SuperAdmin, UserRole};
use unibook_rs::email::OtpNotifier;
use unibook_rs::storage::AccountStore;
use unibook_rs::utils::crypto;
use unibook_rs::utils::error::{PlatformError, Result};
use uuid::Uuid;

/// In-memory implementation of the account store contract
#[derive(Default)]
pub struct InMemoryStore {
    accounts: Mutex<HashMap<Uuid, Account>>,
    admins: Mutex<Vec<SuperAdmin>>,
    forum_links: Mutex<Vec<(Uuid, Uuid)>>,
}

impl InMemoryStore {
    /// Read an account by email, panicking when absent
    pub fn account(&self, email: &str) -> Account {
        self.try_account(email).expect("account not found")
    }

    /// Read an account by email
    pub fn try_account(&self, email: &str) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned()
    }

    /// Mutate a stored account in place (e.g. to move an expiry timestamp)
    pub fn tweak_account(&self, email: &str, tweak: impl FnOnce(&mut Account)) {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .values_mut()
            .find(|a| a.email == email)
            .expect("account not found");
        tweak(account);
    }

    /// Seed an administrator identity
    pub fn seed_admin(&self, email: &str, password: &str) -> SuperAdmin {
        let admin = SuperAdmin {
            id: Uuid::new_v4(),
            full_name: "Platform Admin".to_string(),
            email: email.to_string(),
            password_hash: crypto::hash_secret(password).unwrap(),
            created_at: Utc::now(),
        };
        self.admins.lock().unwrap().push(admin.clone());
        admin
    }

    /// Recorded forum headship links
    pub fn forum_links(&self) -> Vec<(Uuid, Uuid)> {
        self.forum_links.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn create_account(&self, account: NewAccount) -> Result<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.values().any(|a| a.email == account.email) {
            return Err(PlatformError::conflict("account already exists"));
        }

        let now = Utc::now();
        let created = Account {
            id: Uuid::new_v4(),
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
        };
        accounts.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self.try_account(email))
    }

    async fn find_account_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.accounts.lock().unwrap().get(&id).cloned())
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<SuperAdmin>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<SuperAdmin>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn set_email_verification_details(
        &self,
        id: Uuid,
        hashed_otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.email_verification_token = Some(hashed_otp.to_string());
        account.email_verification_expires = Some(expires_at);
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn mark_email_verified(&self, id: Uuid) -> Result<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.is_email_verified = true;
        account.email_verification_token = None;
        account.email_verification_expires = None;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    async fn set_password_reset_details(
        &self,
        id: Uuid,
        hashed_otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.password_reset_token = Some(hashed_otp.to_string());
        account.password_reset_expires = Some(expires_at);
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn clear_password_reset_details(&self, id: Uuid) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.password_reset_token = None;
        account.password_reset_expires = None;
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.password_hash = password_hash.to_string();
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn link_forum_head(&self, user_id: Uuid, forum_id: Uuid) -> Result<()> {
        self.forum_links.lock().unwrap().push((user_id, forum_id));
        Ok(())
    }

    async fn forum_ids_for_account(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        Ok(self
            .forum_links
            .lock()
            .unwrap()
            .iter()
            .filter(|(user, _)| *user == user_id)
            .map(|(_, forum)| *forum)
            .collect())
    }
}

/// Notifier that records every delivered code instead of sending mail
#[derive(Default)]
pub struct RecordingNotifier {
    deliveries: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    /// The most recent code delivered to an address
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(recipient, _)| recipient == email)
            .map(|(_, code)| code.clone())
    }

    /// Number of codes delivered to an address
    pub fn delivery_count_for(&self, email: &str) -> usize {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .filter(|(recipient, _)| recipient == email)
            .count()
    }
}

impl OtpNotifier for RecordingNotifier {
    fn deliver(&self, recipient: &str, code: &str) {
        self.deliveries
            .lock()
            .unwrap()
            .push((recipient.to_string(), code.to_string()));
    }
}

/// A fully wired authentication backend over in-memory collaborators
pub struct TestBackend {
    pub auth: AuthService,
    pub store: Arc<InMemoryStore>,
    pub outbox: Arc<RecordingNotifier>,
}

/// Build a backend with test collaborators
pub fn backend() -> TestBackend {
    let store = Arc::new(InMemoryStore::default());
    let outbox = Arc::new(RecordingNotifier::default());
    let config = AuthConfig {
        jwt_secret: "integration-test-signing-secret".to_string(),
    };

    let auth = AuthService::new(&config, store.clone(), outbox.clone()).unwrap();

    TestBackend {
        auth,
        store,
        outbox,
    }
}

/// Registration payload helper
pub fn registration(email: &str, password: &str, role: &str) -> unibook_rs::auth::Registration {
    unibook_rs::auth::Registration {
        full_name: "Integration Tester".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: role.to_string(),
        college_id: Some(Uuid::new_v4()),
        forum_id: None,
    }
}

/// Approve a pending account, standing in for the external admin action
pub fn approve(store: &InMemoryStore, email: &str) {
    store.tweak_account(email, |account| {
        account.approval_status = ApprovalStatus::Approved;
    });
}

/// Parse a role claim back into the domain enum
pub fn role_claim(auth: &AuthService, token: &str) -> UserRole {
    auth.tokens().verify(token).unwrap().role.parse().unwrap()
}
