//! User service for business logic.
//!
//! This module provides the `UserService` for account registration, removal and
//! summaries. Registration validates the credentials before anything is stored and always
//! leaves the account in the registering guild's member set.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guild::GuildRepository, user::UserRepository},
    error::AppError,
    model::user::{RegisterUserParam, User, UserSummary},
    service::guild::GuildService,
};

/// Share codes issued by Steam start with this prefix.
pub const SHARE_CODE_PREFIX: &str = "CSGO-";

/// Service providing business logic for account management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an account in a guild.
    ///
    /// Creates the guild if it is unknown, creates or updates the account and adds it to
    /// the guild's members. Re-registering rotates the account's credentials.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild the registration came from
    /// - `channel_id` - Channel to use if the guild has to be created
    /// - `param` - Account credentials
    ///
    /// # Returns
    /// - `Ok(User)` - Registered account
    /// - `Err(AppError::BadRequest)` - Invalid Steam ID, auth code or share code
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(
        &self,
        guild_id: &str,
        channel_id: Option<&str>,
        param: RegisterUserParam,
    ) -> Result<User, AppError> {
        let param = validate_registration(param)?;

        let guild = GuildService::new(self.db)
            .ensure_exists(guild_id, channel_id)
            .await?;
        let user = UserRepository::new(self.db).upsert(param).await?;
        GuildRepository::new(self.db)
            .add_user(guild.id, user.id)
            .await?;

        tracing::info!("Registered {} in guild {}", user.steam_id, guild.guild_id);

        Ok(user)
    }

    /// Removes an account from the bot and from every guild.
    ///
    /// # Returns
    /// - `Ok(())` - Account removed
    /// - `Err(AppError::NotFound)` - No account with that Steam ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, steam_id: &str) -> Result<(), AppError> {
        let removed = UserRepository::new(self.db)
            .delete_by_steam_id(steam_id.trim())
            .await?;

        if !removed {
            return Err(AppError::NotFound(format!(
                "Steam account {} is not registered",
                steam_id
            )));
        }

        tracing::info!("Removed Steam account {}", steam_id);

        Ok(())
    }

    /// Lists the members of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of members returned
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Up to `limit` members and the total member count
    /// - `Err(AppError::NotFound)` - Guild unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_for_guild(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let guild_repo = GuildRepository::new(self.db);

        let guild = guild_repo
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;

        let users = guild_repo.get_members(guild.id, Some(limit)).await?;
        let total = guild_repo.count_users(guild.id).await?;

        Ok((users, total))
    }

    /// Gets an account with the number of matches linked to it.
    ///
    /// # Returns
    /// - `Ok(UserSummary)` - Account found
    /// - `Err(AppError::NotFound)` - No account with that Steam ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_summary(&self, steam_id: &str) -> Result<UserSummary, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_steam_id(steam_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", steam_id)))?;
        let game_count = user_repo.count_games(user.id).await?;

        Ok(UserSummary { user, game_count })
    }
}

/// Trims and checks registration input.
///
/// # Returns
/// - `Ok(RegisterUserParam)` - Trimmed parameters
/// - `Err(AppError::BadRequest)` - First problem found
pub fn validate_registration(param: RegisterUserParam) -> Result<RegisterUserParam, AppError> {
    let steam_id = param.steam_id.trim().to_string();
    let auth_code = param.auth_code.trim().to_string();
    let last_share_code = param.last_share_code.trim().to_string();

    if steam_id.is_empty() || !steam_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest(
            "Steam ID must be a numeric SteamID64".to_string(),
        ));
    }

    if auth_code.is_empty() {
        return Err(AppError::BadRequest("Auth code is required".to_string()));
    }

    if !last_share_code.starts_with(SHARE_CODE_PREFIX) {
        return Err(AppError::BadRequest(format!(
            "Share code must start with {}",
            SHARE_CODE_PREFIX
        )));
    }

    Ok(RegisterUserParam {
        steam_id,
        auth_code,
        last_share_code,
        discord_user_id: param.discord_user_id,
    })
}
