//! Guild domain models.

use chrono::{DateTime, Utc};

use crate::model::guild::GuildDto;

/// Discord guild receiving match notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    /// Internal row id used by association tables.
    pub id: i32,
    /// Discord guild snowflake.
    pub guild_id: String,
    /// Channel notifications are posted to.
    pub channel_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guild {
    /// Converts an entity model to a guild domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// True when no real channel was found on first contact and the guild id stands in
    /// for the notification channel.
    pub fn has_placeholder_channel(&self) -> bool {
        self.channel_id == self.guild_id
    }
}

/// Guild together with the members that matched a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMembership {
    pub guild: Guild,
    /// Internal user ids, ascending.
    pub user_ids: Vec<i32>,
}

/// Guild with member and match counts.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    pub guild: Guild,
    pub user_count: u64,
    pub game_count: u64,
}

impl GuildSummary {
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.guild.id,
            guild_id: self.guild.guild_id,
            channel_id: self.guild.channel_id,
            user_count: self.user_count,
            game_count: self.game_count,
            created_at: self.guild.created_at,
            updated_at: self.guild.updated_at,
        }
    }
}
