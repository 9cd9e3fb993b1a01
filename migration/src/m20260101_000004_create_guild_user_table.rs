use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;
use super::m20260101_000002_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildUser::Table)
                    .if_not_exists()
                    .col(integer(GuildUser::GuildId))
                    .col(integer(GuildUser::UserId))
                    .col(timestamp(GuildUser::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(GuildUser::GuildId)
                            .col(GuildUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_guild_id")
                            .from(GuildUser::Table, GuildUser::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_user_id")
                            .from(GuildUser::Table, GuildUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_user_user_id")
                    .table(GuildUser::Table)
                    .col(GuildUser::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildUser {
    Table,
    GuildId,
    UserId,
    CreatedAt,
}
