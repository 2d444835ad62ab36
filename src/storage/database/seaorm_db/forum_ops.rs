use crate::utils::error::{PlatformError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, forum_head};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Record a forum headship
    pub async fn link_forum_head(
        &self,
        user_id: uuid::Uuid,
        forum_id: uuid::Uuid,
    ) -> Result<()> {
        debug!("Linking forum {} to account {}", forum_id, user_id);

        let active_model = forum_head::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            forum_id: Set(forum_id),
            created_at: Set(chrono::Utc::now().into()),
        };

        entities::ForumHead::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(())
    }

    /// Forums the account heads
    pub async fn forum_ids_for_account(&self, user_id: uuid::Uuid) -> Result<Vec<uuid::Uuid>> {
        debug!("Listing forum headships for account {}", user_id);

        let links = entities::ForumHead::find()
            .filter(forum_head::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(PlatformError::Database)?;

        Ok(links.into_iter().map(|link| link.forum_id).collect())
    }
}
