use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Forum headship database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "forum_heads")]
pub struct Model {
    /// Link ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Account holding the headship
    pub user_id: Uuid,

    /// Forum being headed
    pub forum_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Forum head entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to user relation
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
