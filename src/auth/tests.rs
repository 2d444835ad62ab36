//! Tests for the account state machine

use super::{AuthService, Registration};
use crate::config::AuthConfig;
use crate::core::models::{Account, ApprovalStatus, NewAccount, SuperAdmin, UserRole};
use crate::email::{MockOtpNotifier, OtpNotifier};
use crate::storage::AccountStore;
use crate::utils::crypto;
use crate::utils::error::{PlatformError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory store for exercising the state machine without a database
#[derive(Default)]
struct FakeStore {
    accounts: Mutex<HashMap<Uuid, Account>>,
    admins: Mutex<Vec<SuperAdmin>>,
    forum_links: Mutex<Vec<(Uuid, Uuid)>>,
    fail_forum_links: bool,
}

impl FakeStore {
    fn insert_account(&self, account: Account) {
        self.accounts.lock().unwrap().insert(account.id, account);
    }

    fn insert_admin(&self, admin: SuperAdmin) {
        self.admins.lock().unwrap().push(admin);
    }

    fn account_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned()
    }
}

#[async_trait]
impl AccountStore for FakeStore {
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
        Ok(self.account_by_email(email))
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
        Ok(())
    }

    async fn clear_password_reset_details(&self, id: Uuid) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.password_reset_token = None;
        account.password_reset_expires = None;
        Ok(())
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| PlatformError::not_found("Account not found"))?;
        account.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn link_forum_head(&self, user_id: Uuid, forum_id: Uuid) -> Result<()> {
        if self.fail_forum_links {
            return Err(PlatformError::internal("forum link write failed"));
        }
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

fn service(store: Arc<FakeStore>, notifier: Arc<dyn OtpNotifier>) -> AuthService {
    let config = AuthConfig {
        jwt_secret: "unit-test-signing-secret".to_string(),
    };
    AuthService::new(&config, store, notifier).unwrap()
}

fn silent_notifier() -> Arc<dyn OtpNotifier> {
    let mut mock = MockOtpNotifier::new();
    mock.expect_deliver().returning(|_, _| ());
    Arc::new(mock)
}

fn registration(email: &str, role: &str) -> Registration {
    Registration {
        full_name: "Test User".to_string(),
        email: email.to_string(),
        password: "p1".to_string(),
        role: role.to_string(),
        college_id: Some(Uuid::new_v4()),
        forum_id: None,
    }
}

fn seeded_account(email: &str, password: &str, verified: bool, status: ApprovalStatus) -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        full_name: "Seeded User".to_string(),
        email: email.to_string(),
        password_hash: crypto::hash_secret(password).unwrap(),
        role: UserRole::Student,
        college_id: Uuid::new_v4(),
        approval_status: status,
        is_email_verified: verified,
        email_verification_token: None,
        email_verification_expires: None,
        password_reset_token: None,
        password_reset_expires: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn register_delivers_exactly_one_code() {
    let store = Arc::new(FakeStore::default());
    let mut mock = MockOtpNotifier::new();
    mock.expect_deliver()
        .times(1)
        .withf(|recipient, code| recipient == "s@college.edu" && code.len() == 4)
        .returning(|_, _| ());

    let auth = service(store.clone(), Arc::new(mock));
    auth.register(registration("s@college.edu", "student"))
        .await
        .unwrap();

    let stored = store.account_by_email("s@college.edu").unwrap();
    assert_eq!(stored.approval_status, ApprovalStatus::Approved);
    assert!(!stored.is_email_verified);
    assert!(stored.email_verification_token.is_some());
    assert!(stored.email_verification_expires.is_some());
}

#[tokio::test]
async fn register_rejects_unknown_and_admin_roles() {
    let store = Arc::new(FakeStore::default());
    let mut mock = MockOtpNotifier::new();
    mock.expect_deliver().times(0);
    let auth = service(store, Arc::new(mock));

    for role in ["dean", "super_admin", ""] {
        let err = auth
            .register(registration("r@college.edu", role))
            .await
            .unwrap_err();
        assert!(matches!(err, PlatformError::Validation(_)));
    }
}

#[tokio::test]
async fn register_requires_college_id() {
    let store = Arc::new(FakeStore::default());
    let auth = service(store, silent_notifier());

    let mut reg = registration("c@college.edu", "student");
    reg.college_id = None;

    let err = auth.register(reg).await.unwrap_err();
    assert!(matches!(err, PlatformError::Validation(_)));
}

#[tokio::test]
async fn register_maps_duplicate_email_to_conflict() {
    let store = Arc::new(FakeStore::default());
    let auth = service(store, silent_notifier());

    auth.register(registration("dup@college.edu", "student"))
        .await
        .unwrap();
    let err = auth
        .register(registration("dup@college.edu", "teacher"))
        .await
        .unwrap_err();

    assert!(matches!(err, PlatformError::Conflict(_)));
}

#[tokio::test]
async fn teacher_registration_starts_pending() {
    let store = Arc::new(FakeStore::default());
    let auth = service(store.clone(), silent_notifier());

    auth.register(registration("t@college.edu", "teacher"))
        .await
        .unwrap();

    let stored = store.account_by_email("t@college.edu").unwrap();
    assert_eq!(stored.approval_status, ApprovalStatus::Pending);
}

#[tokio::test]
async fn forum_head_link_is_recorded() {
    let store = Arc::new(FakeStore::default());
    let auth = service(store.clone(), silent_notifier());

    let forum_id = Uuid::new_v4();
    let mut reg = registration("fh@college.edu", "forum_head");
    reg.forum_id = Some(forum_id);
    auth.register(reg).await.unwrap();

    let account = store.account_by_email("fh@college.edu").unwrap();
    let links = store.forum_links.lock().unwrap().clone();
    assert_eq!(links, vec![(account.id, forum_id)]);
}

#[tokio::test]
async fn forum_head_link_failure_does_not_fail_registration() {
    let store = Arc::new(FakeStore {
        fail_forum_links: true,
        ..FakeStore::default()
    });
    let auth = service(store.clone(), silent_notifier());

    let mut reg = registration("fh2@college.edu", "forum_head");
    reg.forum_id = Some(Uuid::new_v4());
    auth.register(reg).await.unwrap();

    assert!(store.account_by_email("fh2@college.edu").is_some());
}

#[tokio::test]
async fn resend_for_unknown_email_delivers_nothing() {
    let store = Arc::new(FakeStore::default());
    let mut mock = MockOtpNotifier::new();
    mock.expect_deliver().times(0);
    let auth = service(store, Arc::new(mock));

    // Same success response as a hit; no probe signal either way
    auth.resend_verification_otp("ghost@college.edu")
        .await
        .unwrap();
}

#[tokio::test]
async fn login_gates_run_before_password_comparison() {
    let store = Arc::new(FakeStore::default());
    store.insert_account(seeded_account(
        "unverified@college.edu",
        "correct-password",
        false,
        ApprovalStatus::Approved,
    ));
    let auth = service(store, silent_notifier());

    // Correct password, but the verification gate comes first
    let err = auth
        .login("unverified@college.edu", "correct-password")
        .await
        .unwrap_err();

    match err {
        PlatformError::NotVerified { email } => assert_eq!(email, "unverified@college.edu"),
        other => panic!("expected NotVerified, got {:?}", other),
    }
}

#[tokio::test]
async fn login_surfaces_rejection_and_pending_states() {
    let store = Arc::new(FakeStore::default());
    store.insert_account(seeded_account(
        "rejected@college.edu",
        "p1",
        true,
        ApprovalStatus::Rejected,
    ));
    store.insert_account(seeded_account(
        "pending@college.edu",
        "p1",
        true,
        ApprovalStatus::Pending,
    ));
    let auth = service(store, silent_notifier());

    assert!(matches!(
        auth.login("rejected@college.edu", "p1").await.unwrap_err(),
        PlatformError::AccountRejected
    ));
    assert!(matches!(
        auth.login("pending@college.edu", "p1").await.unwrap_err(),
        PlatformError::PendingApproval
    ));
}

#[tokio::test]
async fn login_rejects_unknown_email_and_wrong_password_alike() {
    let store = Arc::new(FakeStore::default());
    store.insert_account(seeded_account(
        "known@college.edu",
        "p1",
        true,
        ApprovalStatus::Approved,
    ));
    let auth = service(store, silent_notifier());

    assert!(matches!(
        auth.login("ghost@college.edu", "p1").await.unwrap_err(),
        PlatformError::InvalidCredentials
    ));
    assert!(matches!(
        auth.login("known@college.edu", "wrong").await.unwrap_err(),
        PlatformError::InvalidCredentials
    ));
}

#[tokio::test]
async fn admin_login_takes_priority_and_omits_tenant() {
    let store = Arc::new(FakeStore::default());
    store.insert_admin(SuperAdmin {
        id: Uuid::new_v4(),
        full_name: "Platform Admin".to_string(),
        email: "root@unibook.app".to_string(),
        password_hash: crypto::hash_secret("admin-pass").unwrap(),
        created_at: Utc::now(),
    });
    let auth = service(store, silent_notifier());

    let token = auth.login("root@unibook.app", "admin-pass").await.unwrap();
    let claims = auth.tokens().verify(&token).unwrap();

    assert_eq!(claims.role, "super_admin");
    assert_eq!(claims.college_id, None);
}

#[tokio::test]
async fn failed_admin_match_falls_through_to_account_namespace() {
    let store = Arc::new(FakeStore::default());
    store.insert_admin(SuperAdmin {
        id: Uuid::new_v4(),
        full_name: "Platform Admin".to_string(),
        email: "shared@unibook.app".to_string(),
        password_hash: crypto::hash_secret("admin-pass").unwrap(),
        created_at: Utc::now(),
    });
    store.insert_account(seeded_account(
        "shared@unibook.app",
        "student-pass",
        true,
        ApprovalStatus::Approved,
    ));
    let auth = service(store, silent_notifier());

    let token = auth.login("shared@unibook.app", "student-pass").await.unwrap();
    let claims = auth.tokens().verify(&token).unwrap();

    assert_eq!(claims.role, "student");
    assert!(claims.college_id.is_some());
}

#[tokio::test]
async fn login_requires_both_fields() {
    let store = Arc::new(FakeStore::default());
    let auth = service(store, silent_notifier());

    assert!(matches!(
        auth.login("", "p1").await.unwrap_err(),
        PlatformError::Validation(_)
    ));
    assert!(matches!(
        auth.login("a@x.com", "").await.unwrap_err(),
        PlatformError::Validation(_)
    ));
}
