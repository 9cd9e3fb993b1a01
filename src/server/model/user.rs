//! Account domain models and parameters.
//!
//! An account is a Steam identity whose match history the poller follows. It is keyed by
//! its immutable Steam ID; the auth code and last share code rotate.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Linked Steam account tracked for new matches.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Internal row id used by association tables.
    pub id: i32,
    /// SteamID64 of the account.
    pub steam_id: String,
    /// Match history authentication code issued by Steam.
    pub auth_code: String,
    /// Most recent share code known for the account. Empty disables polling.
    pub last_share_code: String,
    /// Discord user who registered the account, when known.
    pub discord_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            steam_id: entity.steam_id,
            auth_code: entity.auth_code,
            last_share_code: entity.last_share_code,
            discord_user_id: entity.discord_user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the poller may ask for the match following `last_share_code`.
    pub fn is_pollable(&self) -> bool {
        !self.last_share_code.is_empty()
    }
}

/// Parameters for registering or re-registering an account.
///
/// Re-registering an existing Steam ID rotates its auth code and last share code. The
/// registering Discord user is only overwritten when provided.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub steam_id: String,
    pub auth_code: String,
    pub last_share_code: String,
    pub discord_user_id: Option<String>,
}

/// Account with the number of matches linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub user: User,
    pub game_count: u64,
}

impl UserSummary {
    /// Converts the summary to a DTO for API responses. The auth code is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user.id,
            steam_id: self.user.steam_id,
            last_share_code: self.user.last_share_code,
            game_count: self.game_count,
            created_at: self.user.created_at,
            updated_at: self.user.updated_at,
        }
    }
}
