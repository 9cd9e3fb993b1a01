//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .steam_id("76561198000000001")
///     .last_share_code("CSGO-aaaaa-bbbbb-ccccc-ddddd-eeeee")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    steam_id: String,
    auth_code: String,
    last_share_code: String,
    discord_user_id: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - steam_id: `"7656119{id:010}"` where id is auto-incremented
    /// - auth_code: `"AAAA-BBBBB-{id}"`
    /// - last_share_code: `"CSGO-{id}"`
    /// - discord_user_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            steam_id: format!("7656119{:010}", id),
            auth_code: format!("AAAA-BBBBB-{}", id),
            last_share_code: format!("CSGO-{}", id),
            discord_user_id: None,
        }
    }

    /// Sets the Steam ID for the user.
    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    /// Sets the match history authentication code.
    pub fn auth_code(mut self, auth_code: impl Into<String>) -> Self {
        self.auth_code = auth_code.into();
        self
    }

    /// Sets the last known share code. An empty string excludes the user from polling.
    pub fn last_share_code(mut self, last_share_code: impl Into<String>) -> Self {
        self.last_share_code = last_share_code.into();
        self
    }

    /// Sets the Discord user who registered the account.
    pub fn discord_user_id(mut self, discord_user_id: impl Into<String>) -> Self {
        self.discord_user_id = Some(discord_user_id.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            steam_id: ActiveValue::Set(self.steam_id),
            auth_code: ActiveValue::Set(self.auth_code),
            last_share_code: ActiveValue::Set(self.last_share_code),
            discord_user_id: ActiveValue::Set(self.discord_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific Steam ID.
///
/// Shorthand for `UserFactory::new(db).steam_id(steam_id).build().await`.
pub async fn create_user_with_steam_id(
    db: &DatabaseConnection,
    steam_id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).steam_id(steam_id).build().await
}
