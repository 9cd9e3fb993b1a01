//! Guild service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, guild::GuildRepository},
    error::AppError,
    model::{
        game::Game,
        guild::{Guild, GuildSummary},
    },
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the guild, creating it on first contact.
    ///
    /// Without a usable channel the guild id is stored as the notification channel until
    /// an administrator sets one.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Default notification channel, if one was found
    ///
    /// # Returns
    /// - `Ok(Guild)` - Existing or newly created guild
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn ensure_exists(
        &self,
        guild_id: &str,
        channel_id: Option<&str>,
    ) -> Result<Guild, AppError> {
        let (guild, _) = self.ensure_exists_with_status(guild_id, channel_id).await?;
        Ok(guild)
    }

    /// Same as [`Self::ensure_exists`] but also reports whether the guild was created.
    pub async fn ensure_exists_with_status(
        &self,
        guild_id: &str,
        channel_id: Option<&str>,
    ) -> Result<(Guild, bool), AppError> {
        let channel_id = match channel_id.filter(|c| !c.is_empty()) {
            Some(channel_id) => channel_id,
            None => guild_id,
        };

        let (guild, created) = GuildRepository::new(self.db)
            .create_if_missing(guild_id, channel_id)
            .await?;

        if created {
            if guild.has_placeholder_channel() {
                tracing::warn!(
                    "Guild {} has no usable channel; notifications go nowhere until one is set",
                    guild.guild_id
                );
            } else {
                tracing::info!(
                    "Tracking guild {} in channel {}",
                    guild.guild_id,
                    guild.channel_id
                );
            }
        }

        Ok((guild, created))
    }

    /// Changes where a guild's notifications are posted.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Guild with the new channel
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_channel(&self, guild_id: &str, channel_id: &str) -> Result<Guild, AppError> {
        let guild_repo = GuildRepository::new(self.db);

        let (guild, created) = guild_repo.create_if_missing(guild_id, channel_id).await?;
        if created {
            return Ok(guild);
        }

        guild_repo.update_channel(guild_id, channel_id).await?;

        guild_repo
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))
    }

    /// Gets a guild with its member and match counts.
    ///
    /// # Returns
    /// - `Ok(GuildSummary)` - Guild found
    /// - `Err(AppError::NotFound)` - Guild unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_summary(&self, guild_id: &str) -> Result<GuildSummary, AppError> {
        let guild_repo = GuildRepository::new(self.db);

        let guild = guild_repo
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;
        let user_count = guild_repo.count_users(guild.id).await?;
        let game_count = guild_repo.count_games(guild.id).await?;

        Ok(GuildSummary {
            guild,
            user_count,
            game_count,
        })
    }

    /// Gets the newest matches tracked in a guild with their participant counts.
    ///
    /// # Returns
    /// - `Ok(Vec<(Game, u64)>)` - Up to `limit` matches, newest first
    /// - `Err(AppError::NotFound)` - Guild unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn recent_games(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<Vec<(Game, u64)>, AppError> {
        let guild = GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;

        let game_repo = GameRepository::new(self.db);
        let games = game_repo.get_for_guild(guild.id, limit).await?;

        let mut result = Vec::with_capacity(games.len());
        for game in games {
            let players = game_repo.count_players(game.id).await?;
            result.push((game, players));
        }

        Ok(result)
    }
}
