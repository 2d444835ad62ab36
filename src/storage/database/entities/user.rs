use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Full name
    pub full_name: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Password hash
    pub password_hash: String,

    /// Account role
    pub role: String,

    /// Associated college
    pub college_id: Uuid,

    /// College-admin approval gate
    pub approval_status: String,

    /// Email verification status
    pub is_email_verified: bool,

    /// Hash of the outstanding verification OTP
    pub email_verification_token: Option<String>,

    /// Verification OTP expiry
    pub email_verification_expires: Option<DateTimeWithTimeZone>,

    /// Hash of the outstanding password-reset OTP
    pub password_reset_token: Option<String>,

    /// Password-reset OTP expiry
    pub password_reset_expires: Option<DateTimeWithTimeZone>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Forum headships relation
    #[sea_orm(has_many = "super::forum_head::Entity")]
    ForumHeads,
}

impl Related<super::forum_head::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForumHeads.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain account model
    pub fn to_domain_account(&self) -> crate::core::models::Account {
        use crate::core::models::{ApprovalStatus, UserRole};
        use std::str::FromStr;

        let role = UserRole::from_str(&self.role).unwrap_or(UserRole::Student);
        let approval_status =
            ApprovalStatus::from_str(&self.approval_status).unwrap_or(ApprovalStatus::Pending);

        crate::core::models::Account {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            role,
            college_id: self.college_id,
            approval_status,
            is_email_verified: self.is_email_verified,
            email_verification_token: self.email_verification_token.clone(),
            email_verification_expires: self
                .email_verification_expires
                .map(|dt| dt.naive_utc().and_utc()),
            password_reset_token: self.password_reset_token.clone(),
            password_reset_expires: self.password_reset_expires.map(|dt| dt.naive_utc().and_utc()),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Build an active model for a new account
    pub fn from_new_account(
        account: &crate::core::models::NewAccount,
        id: Uuid,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            full_name: Set(account.full_name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            role: Set(account.role.to_string()),
            college_id: Set(account.college_id),
            approval_status: Set(account.approval_status.to_string()),
            is_email_verified: Set(false),
            email_verification_token: Set(None),
            email_verification_expires: Set(None),
            password_reset_token: Set(None),
            password_reset_expires: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
