//! Guild data repository for database operations.

use std::collections::BTreeMap;

use crate::server::model::{
    guild::{Guild, GuildMembership},
    user::User,
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository providing database operations for guilds and their member sets.
pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    /// Creates a new GuildRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a guild unless it already exists.
    ///
    /// An existing guild keeps its channel; concurrent first contacts for the same guild
    /// resolve to a single row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Notification channel used if the guild is created
    ///
    /// # Returns
    /// - `Ok((Guild, true))` - Guild was created
    /// - `Ok((Guild, false))` - Guild already existed
    /// - `Err(DbErr)` - Database error during insert or lookup
    pub async fn create_if_missing(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<(Guild, bool), DbErr> {
        let now = Utc::now();
        let rows = entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let guild = self
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild {}", guild_id)))?;

        Ok((guild, rows > 0))
    }

    /// Finds a guild by its Discord guild ID.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Guild found
    /// - `Ok(None)` - Guild not known to the bot
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<Guild>, DbErr> {
        let entity = entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Guild::from_entity))
    }

    /// Gets all guilds ordered by creation time.
    pub async fn get_all(&self) -> Result<Vec<Guild>, DbErr> {
        let entities = entity::prelude::Guild::find()
            .order_by_asc(entity::guild::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guild::from_entity).collect())
    }

    /// Changes the notification channel of a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - Channel updated
    /// - `Ok(false)` - No guild with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_channel(&self, guild_id: &str, channel_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Guild::update_many()
            .filter(entity::guild::Column::GuildId.eq(guild_id))
            .col_expr(
                entity::guild::Column::ChannelId,
                sea_orm::sea_query::Expr::value(channel_id.to_string()),
            )
            .col_expr(
                entity::guild::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds an account to a guild's member set.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - Account was already a member
    /// - `Err(DbErr)` - Database error, including unknown guild or user ids
    pub async fn add_user(&self, guild_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::GuildUser::insert(entity::guild_user::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_user::Column::GuildId,
                entity::guild_user::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Adds a match to a guild's match set.
    ///
    /// # Returns
    /// - `Ok(true)` - Link created
    /// - `Ok(false)` - Match was already linked
    /// - `Err(DbErr)` - Database error, including unknown guild or game ids
    pub async fn add_game(&self, guild_id: i32, game_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::GuildGame::insert(entity::guild_game::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            game_id: ActiveValue::Set(game_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_game::Column::GuildId,
                entity::guild_game::Column::GameId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Removes a match from a guild's match set.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - Match was not linked
    /// - `Err(DbErr)` - Database error
    pub async fn remove_game(&self, guild_id: i32, game_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildGame::delete_many()
            .filter(entity::guild_game::Column::GuildId.eq(guild_id))
            .filter(entity::guild_game::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the members of a guild ordered by registration time.
    ///
    /// # Arguments
    /// - `guild_id` - Internal guild id
    /// - `limit` - Maximum number of members to return, or `None` for all
    pub async fn get_members(&self, guild_id: i32, limit: Option<u64>) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .inner_join(entity::prelude::GuildUser)
            .filter(entity::guild_user::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::user::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds every guild whose member set contains any of the provided accounts.
    ///
    /// Each guild appears once, together with the subset of the provided accounts that are
    /// its members.
    ///
    /// # Arguments
    /// - `user_ids` - Internal account ids
    ///
    /// # Returns
    /// - `Ok(Vec<GuildMembership>)` - Matching guilds ordered by internal id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_memberships_for_users(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<GuildMembership>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::GuildUser::find()
            .filter(entity::guild_user::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut members_by_guild: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for row in rows {
            members_by_guild
                .entry(row.guild_id)
                .or_default()
                .push(row.user_id);
        }

        if members_by_guild.is_empty() {
            return Ok(Vec::new());
        }

        let guilds = entity::prelude::Guild::find()
            .filter(entity::guild::Column::Id.is_in(members_by_guild.keys().copied()))
            .order_by_asc(entity::guild::Column::Id)
            .all(self.db)
            .await?;

        Ok(guilds
            .into_iter()
            .map(|guild| {
                let mut user_ids = members_by_guild.remove(&guild.id).unwrap_or_default();
                user_ids.sort_unstable();
                GuildMembership {
                    guild: Guild::from_entity(guild),
                    user_ids,
                }
            })
            .collect())
    }

    /// Counts the members of a guild.
    pub async fn count_users(&self, guild_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GuildUser::find()
            .filter(entity::guild_user::Column::GuildId.eq(guild_id))
            .count(self.db)
            .await
    }

    /// Counts matches linked to a guild.
    pub async fn count_games(&self, guild_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GuildGame::find()
            .filter(entity::guild_game::Column::GuildId.eq(guild_id))
            .count(self.db)
            .await
    }
}
