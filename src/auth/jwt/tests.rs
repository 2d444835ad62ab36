//! Tests for session token issuance and verification

use super::types::{SessionClaims, TokenIssuer};
use crate::config::AuthConfig;
use crate::core::models::{Account, ApprovalStatus, SuperAdmin, UserRole};
use uuid::Uuid;

fn issuer(secret: &str) -> TokenIssuer {
    TokenIssuer::new(&AuthConfig {
        jwt_secret: secret.to_string(),
    })
    .unwrap()
}

fn sample_account() -> Account {
    let now = chrono::Utc::now();
    Account {
        id: Uuid::new_v4(),
        full_name: "Sample Student".to_string(),
        email: "student@college.edu".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        role: UserRole::Student,
        college_id: Uuid::new_v4(),
        approval_status: ApprovalStatus::Approved,
        is_email_verified: true,
        email_verification_token: None,
        email_verification_expires: None,
        password_reset_token: None,
        password_reset_expires: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_missing_secret_is_fatal() {
    assert!(TokenIssuer::new(&AuthConfig::default()).is_err());
}

#[test]
fn test_account_token_round_trip() {
    let issuer = issuer("round-trip-secret");
    let account = sample_account();

    let token = issuer.issue(&SessionClaims::for_account(&account)).unwrap();
    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.id, account.id);
    assert_eq!(claims.role, "student");
    assert_eq!(claims.college_id, Some(account.college_id));
}

#[test]
fn test_admin_token_has_no_tenant_claim() {
    let issuer = issuer("round-trip-secret");
    let admin = SuperAdmin {
        id: Uuid::new_v4(),
        full_name: "Platform Admin".to_string(),
        email: "admin@unibook.app".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        created_at: chrono::Utc::now(),
    };

    let claims = SessionClaims::for_admin(&admin);

    // The collegeId claim must be absent from the payload, not null
    let json = serde_json::to_string(&claims).unwrap();
    assert!(!json.contains("collegeId"));

    let token = issuer.issue(&claims).unwrap();
    let claims = issuer.verify(&token).unwrap();
    assert_eq!(claims.role, "super_admin");
    assert_eq!(claims.college_id, None);
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let token = issuer("secret-one")
        .issue(&SessionClaims::for_account(&sample_account()))
        .unwrap();

    assert!(issuer("secret-two").verify(&token).is_err());
}

#[test]
fn test_verify_rejects_tampered_token() {
    let issuer = issuer("tamper-secret");
    let token = issuer
        .issue(&SessionClaims::for_account(&sample_account()))
        .unwrap();

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push(if token.ends_with('x') { 'y' } else { 'x' });

    assert!(issuer.verify(&tampered).is_err());
}
