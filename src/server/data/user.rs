//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing linked Steam accounts. It handles
//! registration upserts, polling queries, last share code updates, match links and
//! account removal.

use crate::server::model::user::{RegisterUserParam, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account or rotates the credentials of an existing one.
    ///
    /// Inserts a new account keyed by Steam ID. On conflict the auth code, last share code
    /// and update timestamp are replaced. The registering Discord user is only updated if
    /// provided, so re-registering through another surface keeps the original link.
    ///
    /// # Arguments
    /// - `param` - Steam ID, auth code, last share code and optional Discord user
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated account
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: RegisterUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::AuthCode,
            entity::user::Column::LastShareCode,
            entity::user::Column::UpdatedAt,
        ];

        if param.discord_user_id.is_some() {
            update_columns.push(entity::user::Column::DiscordUserId);
        }

        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            steam_id: ActiveValue::Set(param.steam_id),
            auth_code: ActiveValue::Set(param.auth_code),
            last_share_code: ActiveValue::Set(param.last_share_code),
            discord_user_id: ActiveValue::Set(param.discord_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::SteamId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds an account by its Steam ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account registered for that Steam ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_steam_id(&self, steam_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::SteamId.eq(steam_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds every registered account among the provided Steam IDs.
    ///
    /// Unknown Steam IDs are simply absent from the result.
    ///
    /// # Arguments
    /// - `steam_ids` - Steam IDs to resolve
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Registered accounts, ordered by Steam ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_steam_ids(&self, steam_ids: &[String]) -> Result<Vec<User>, DbErr> {
        if steam_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::SteamId.is_in(steam_ids.iter().cloned()))
            .order_by_asc(entity::user::Column::SteamId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets all accounts ordered by registration time.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets the accounts the poller should query.
    ///
    /// Accounts without a known last share code cannot be asked for a next match and are
    /// skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Accounts with a non-empty last share code
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_pollable(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::LastShareCode.ne(""))
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the last share code for several accounts in one statement.
    ///
    /// # Arguments
    /// - `user_ids` - Internal ids of the accounts that reported the share code
    /// - `share_code` - The newly discovered share code
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of accounts updated (0 for an empty slice)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_last_share_codes(
        &self,
        user_ids: &[i32],
        share_code: &str,
    ) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .col_expr(
                entity::user::Column::LastShareCode,
                sea_orm::sea_query::Expr::value(share_code.to_string()),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links a match to an account.
    ///
    /// # Returns
    /// - `Ok(true)` - Link created
    /// - `Ok(false)` - Link already existed
    /// - `Err(DbErr)` - Database error, including unknown user or game ids
    pub async fn add_game(&self, user_id: i32, game_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::UserGame::insert(entity::user_game::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_game::Column::UserId,
                entity::user_game::Column::GameId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Counts matches linked to an account.
    pub async fn count_games(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UserGame::find()
            .filter(entity::user_game::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Deletes an account and strips it from every guild.
    ///
    /// Membership rows, match links and the account itself are removed in one
    /// transaction, so no guild is left referencing a deleted account.
    ///
    /// # Arguments
    /// - `steam_id` - Steam ID of the account to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account registered for that Steam ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_by_steam_id(&self, steam_id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::SteamId.eq(steam_id))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(false);
        };

        entity::prelude::GuildUser::delete_many()
            .filter(entity::guild_user::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;

        entity::prelude::UserGame::delete_many()
            .filter(entity::user_game::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;

        entity::prelude::User::delete_by_id(user.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
