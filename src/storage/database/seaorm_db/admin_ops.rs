use crate::core::models::SuperAdmin;
use crate::utils::error::{PlatformError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, super_admin};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find administrator by email
    pub async fn find_admin_by_email(&self, email: &str) -> Result<Option<SuperAdmin>> {
        debug!("Finding administrator by email");

        let admin_model = entities::SuperAdmin::find()
            .filter(super_admin::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(admin_model.map(|model| model.to_domain_admin()))
    }

    /// Find administrator by ID
    pub async fn find_admin_by_id(&self, admin_id: uuid::Uuid) -> Result<Option<SuperAdmin>> {
        debug!("Finding administrator by ID: {}", admin_id);

        let admin_model = entities::SuperAdmin::find_by_id(admin_id)
            .one(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(admin_model.map(|model| model.to_domain_admin()))
    }
}
