use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;
use super::m20260101_000003_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGame::Table)
                    .if_not_exists()
                    .col(integer(UserGame::UserId))
                    .col(integer(UserGame::GameId))
                    .col(timestamp(UserGame::CreatedAt))
                    .primary_key(Index::create().col(UserGame::UserId).col(UserGame::GameId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_game_user_id")
                            .from(UserGame::Table, UserGame::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_game_game_id")
                            .from(UserGame::Table, UserGame::GameId)
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
            .drop_table(Table::drop().table(UserGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGame {
    Table,
    UserId,
    GameId,
    CreatedAt,
}
