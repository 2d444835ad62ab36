//! Request and response models for authentication endpoints

use crate::core::models::{Account, SuperAdmin, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account registration request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub college_id: Option<Uuid>,
    #[serde(default)]
    pub forum_id: Option<Uuid>,
}

/// Email verification request
#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub otp: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request carrying only an email (OTP resend, password-reset request)
#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Reset-OTP check request
#[derive(Debug, Deserialize)]
pub struct VerifyResetOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Password reset request
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub password: String,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Verification response carrying a session token
#[derive(Debug, Serialize)]
pub struct VerifyEmailResponse {
    pub message: String,
    pub token: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Administrator profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Regular account profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub college_id: Uuid,
    pub approval_status: String,
    pub is_email_verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub forum_ids: Vec<Uuid>,
}

impl From<&SuperAdmin> for AdminProfile {
    fn from(admin: &SuperAdmin) -> Self {
        Self {
            id: admin.id,
            full_name: admin.full_name.clone(),
            email: admin.email.clone(),
            role: UserRole::SuperAdmin.to_string(),
            created_at: admin.created_at,
        }
    }
}

impl AccountProfile {
    /// Build a profile from an account and its forum headships
    pub fn from_account(account: &Account, forum_ids: Vec<Uuid>) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            role: account.role.to_string(),
            college_id: account.college_id,
            approval_status: account.approval_status.to_string(),
            is_email_verified: account.is_email_verified,
            created_at: account.created_at,
            forum_ids,
        }
    }
}
