use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_guild_table::Guild;
use super::m20260101_000003_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildGame::Table)
                    .if_not_exists()
                    .col(integer(GuildGame::GuildId))
                    .col(integer(GuildGame::GameId))
                    .col(timestamp(GuildGame::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(GuildGame::GuildId)
                            .col(GuildGame::GameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_game_guild_id")
                            .from(GuildGame::Table, GuildGame::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_game_game_id")
                            .from(GuildGame::Table, GuildGame::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildGame {
    Table,
    GuildId,
    GameId,
    CreatedAt,
}
