use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumHeads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForumHeads::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ForumHeads::UserId).uuid().not_null())
                    .col(ColumnDef::new(ForumHeads::ForumId).uuid().not_null())
                    .col(
                        ColumnDef::new(ForumHeads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_heads_user_id")
                            .from(ForumHeads::Table, ForumHeads::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_forum_heads_user_id")
                    .table(ForumHeads::Table)
                    .col(ForumHeads::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumHeads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ForumHeads {
    Table,
    Id,
    UserId,
    ForumId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
