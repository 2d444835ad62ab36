//! Core account types and enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered platform account (student, teacher, or forum head)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID (UUID)
    pub id: Uuid,
    /// Full name
    pub full_name: String,
    /// Email address (unique, case-sensitive as stored)
    pub email: String,
    /// Password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role
    pub role: UserRole,
    /// Associated college
    pub college_id: Uuid,
    /// College-admin approval gate
    pub approval_status: ApprovalStatus,
    /// Email verification status
    pub is_email_verified: bool,
    /// Hash of the outstanding verification OTP, if any
    #[serde(skip_serializing)]
    pub email_verification_token: Option<String>,
    /// Expiry of the outstanding verification OTP
    pub email_verification_expires: Option<DateTime<Utc>>,
    /// Hash of the outstanding password-reset OTP, if any
    #[serde(skip_serializing)]
    pub password_reset_token: Option<String>,
    /// Expiry of the outstanding password-reset OTP
    pub password_reset_expires: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub college_id: Uuid,
    pub approval_status: ApprovalStatus,
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular student account
    Student,
    /// Teacher account, requires college-admin approval
    Teacher,
    /// Forum head account, requires college-admin approval
    ForumHead,
    /// Platform administrator (separate principal namespace, never registered)
    SuperAdmin,
}

impl UserRole {
    /// Whether the role can be requested through self-registration
    pub fn is_registrable(&self) -> bool {
        matches!(self, UserRole::Student | UserRole::Teacher | UserRole::ForumHead)
    }

    /// Approval status an account of this role starts with
    pub fn initial_approval_status(&self) -> ApprovalStatus {
        match self {
            UserRole::Student => ApprovalStatus::Approved,
            _ => ApprovalStatus::Pending,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Teacher => write!(f, "teacher"),
            UserRole::ForumHead => write!(f, "forum_head"),
            UserRole::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "forum_head" => Ok(UserRole::ForumHead),
            "super_admin" => Ok(UserRole::SuperAdmin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// College-admin approval gate, independent of email verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting college-admin review
    Pending,
    /// Cleared to log in once verified
    Approved,
    /// Denied by the college admin
    Rejected,
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {}", s)),
        }
    }
}

impl Account {
    /// Whether an outstanding verification OTP exists and has not expired
    pub fn has_live_verification_token(&self, now: DateTime<Utc>) -> bool {
        match (&self.email_verification_token, self.email_verification_expires) {
            (Some(token), Some(expires)) => !token.is_empty() && now <= expires,
            _ => false,
        }
    }

    /// Whether an outstanding password-reset OTP exists and has not expired
    pub fn has_live_reset_token(&self, now: DateTime<Utc>) -> bool {
        match (&self.password_reset_token, self.password_reset_expires) {
            (Some(token), Some(expires)) => !token.is_empty() && now <= expires,
            _ => false,
        }
    }
}
