//! Game data repository for database operations.
//!
//! State changes are conditional single-statement updates so that concurrent pollers and
//! webhook deliveries can never move a match backwards.

use crate::server::model::game::{DemoStatus, Game};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository providing database operations for matches and their participants.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a match by its share code.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Match found
    /// - `Ok(None)` - No match with that share code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_share_code(&self, share_code: &str) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find()
            .filter(entity::game::Column::ShareCode.eq(share_code))
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Creates a match in the given state unless one with the share code exists.
    ///
    /// # Arguments
    /// - `share_code` - Share code of the match
    /// - `status` - Initial state
    /// - `demo_name` - Initial asset reference, may be empty
    ///
    /// # Returns
    /// - `Ok(true)` - Match created
    /// - `Ok(false)` - Match already existed and was left untouched
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(
        &self,
        share_code: &str,
        status: DemoStatus,
        demo_name: &str,
    ) -> Result<bool, DbErr> {
        let now = Utc::now();
        let rows = entity::prelude::Game::insert(entity::game::ActiveModel {
            share_code: ActiveValue::Set(share_code.to_string()),
            demo_name: ActiveValue::Set(demo_name.to_string()),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::game::Column::ShareCode)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Moves a match into `target` if it is currently in an earlier state.
    ///
    /// The state check and the write happen in one statement. A non-empty `demo_name`
    /// replaces the stored asset reference as part of the same update.
    ///
    /// # Arguments
    /// - `share_code` - Share code of the match
    /// - `target` - State to advance into
    /// - `demo_name` - New asset reference, if any
    ///
    /// # Returns
    /// - `Ok(true)` - Match advanced
    /// - `Ok(false)` - Match missing or already in or past `target`
    /// - `Err(DbErr)` - Database error during update
    pub async fn advance_status(
        &self,
        share_code: &str,
        target: DemoStatus,
        demo_name: Option<&str>,
    ) -> Result<bool, DbErr> {
        let predecessors = target.predecessors();
        if predecessors.is_empty() {
            return Ok(false);
        }

        let mut update = entity::prelude::Game::update_many()
            .col_expr(
                entity::game::Column::Status,
                sea_orm::sea_query::Expr::value(target),
            )
            .col_expr(
                entity::game::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            );

        if let Some(demo_name) = demo_name.filter(|name| !name.is_empty()) {
            update = update.col_expr(
                entity::game::Column::DemoName,
                sea_orm::sea_query::Expr::value(demo_name.to_string()),
            );
        }

        let result = update
            .filter(entity::game::Column::ShareCode.eq(share_code))
            .filter(entity::game::Column::Status.is_in(predecessors.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records participants of a match, ignoring ones already recorded.
    ///
    /// # Arguments
    /// - `game_id` - Internal game id
    /// - `steam_ids` - Participant Steam IDs, registered or not
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of newly recorded participants
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_players(&self, game_id: i32, steam_ids: &[String]) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for steam_id in steam_ids {
            inserted += entity::prelude::GamePlayer::insert(entity::game_player::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                steam_id: ActiveValue::Set(steam_id.clone()),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::game_player::Column::GameId,
                    entity::game_player::Column::SteamId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(inserted)
    }

    /// Gets the participant Steam IDs of a match in ascending order.
    pub async fn get_players(&self, game_id: i32) -> Result<Vec<String>, DbErr> {
        let players = entity::prelude::GamePlayer::find()
            .filter(entity::game_player::Column::GameId.eq(game_id))
            .order_by_asc(entity::game_player::Column::SteamId)
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(|player| player.steam_id).collect())
    }

    /// Counts the participants of a match.
    pub async fn count_players(&self, game_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GamePlayer::find()
            .filter(entity::game_player::Column::GameId.eq(game_id))
            .count(self.db)
            .await
    }

    /// Gets the most recent matches linked to a guild, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Internal guild id
    /// - `limit` - Maximum number of matches to return
    pub async fn get_for_guild(&self, guild_id: i32, limit: u64) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .inner_join(entity::prelude::GuildGame)
            .filter(entity::guild_game::Column::GuildId.eq(guild_id))
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Gets every match a Steam account took part in, newest first.
    pub async fn get_by_steam_id(&self, steam_id: &str) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .inner_join(entity::prelude::GamePlayer)
            .filter(entity::game_player::Column::SteamId.eq(steam_id))
            .order_by_desc(entity::game::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }
}
