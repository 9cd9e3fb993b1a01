use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GamePlayer::Table)
                    .if_not_exists()
                    .col(integer(GamePlayer::GameId))
                    .col(string(GamePlayer::SteamId))
                    .col(timestamp(GamePlayer::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(GamePlayer::GameId)
                            .col(GamePlayer::SteamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_player_game_id")
                            .from(GamePlayer::Table, GamePlayer::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_player_steam_id")
                    .table(GamePlayer::Table)
                    .col(GamePlayer::SteamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GamePlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GamePlayer {
    Table,
    GameId,
    SteamId,
    CreatedAt,
}
