use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Super admin database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "super_admins")]
pub struct Model {
    /// Administrator ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Full name
    pub full_name: String,

    /// Email address (unique within the admin namespace)
    #[sea_orm(unique)]
    pub email: String,

    /// Password hash
    pub password_hash: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain admin model
    pub fn to_domain_admin(&self) -> crate::core::models::SuperAdmin {
        crate::core::models::SuperAdmin {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
        }
    }
}
