//! Guild event handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in, when it joins a new
//! guild and when a guild becomes available after an outage. The guild is stored on first
//! contact with a default notification channel. Leaving a guild keeps its data so that a
//! re-invite resumes with the same members and channel.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, ChannelType, Context, Guild, UnavailableGuild};

use crate::server::{service::guild::GuildService, util::parse::parse_snowflake};

static WELCOME_MESSAGE: &str = "**CS Match Summary Bot** has joined your server!\n\n\
    Register with `/register` to have your matches tracked. Summaries are posted in this \
    channel; use `/set_channel` to pick another one.";

/// Channel considered when choosing where notifications go.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCandidate {
    pub id: u64,
    pub position: u16,
    pub is_text: bool,
    /// Whether the bot may post in the channel.
    pub can_send: bool,
}

/// Chooses the default notification channel for a guild.
///
/// Picks the top-most text channel the bot may post in, then the system channel.
///
/// # Returns
/// - `Some(u64)` - Channel id
/// - `None` - No usable channel; the caller falls back to the placeholder
pub fn pick_default_channel(
    candidates: &[ChannelCandidate],
    system_channel: Option<u64>,
) -> Option<u64> {
    candidates
        .iter()
        .filter(|c| c.is_text && c.can_send)
        .min_by_key(|c| (c.position, c.id))
        .map(|c| c.id)
        .or(system_channel)
}

/// Handles the guild_create event.
///
/// Stores the guild if it is unknown and posts a welcome message when a real channel
/// was found for it. Known guilds keep their configured channel.
///
/// # Arguments
/// - `db` - Database connection for storing the guild
/// - `ctx` - Discord context for the cache and sending the welcome message
/// - `guild` - Guild data including its channels
/// - `_is_new` - Unused; creation is decided by the stored guilds
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get().to_string();
    let bot_id = ctx.cache.current_user().id;
    let bot_member = guild.members.get(&bot_id);

    let candidates: Vec<ChannelCandidate> = guild
        .channels
        .values()
        .map(|channel| ChannelCandidate {
            id: channel.id.get(),
            position: channel.position,
            is_text: channel.kind == ChannelType::Text,
            can_send: bot_member
                .map(|member| guild.user_permissions_in(channel, member).send_messages())
                .unwrap_or(true),
        })
        .collect();
    let default_channel = pick_default_channel(
        &candidates,
        guild.system_channel_id.map(|id| id.get()),
    )
    .map(|id| id.to_string());

    tracing::debug!(
        "Guild create event: {} ({}) - {} channels",
        guild.name,
        guild_id,
        candidates.len()
    );

    let (stored, created) = match GuildService::new(db)
        .ensure_exists_with_status(&guild_id, default_channel.as_deref())
        .await
    {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Failed to store guild {} ({}): {:?}", guild_id, guild.name, e);
            return;
        }
    };

    if !created || stored.has_placeholder_channel() {
        return;
    }

    let Some(channel_id) = parse_snowflake(&stored.channel_id) else {
        return;
    };

    if let Err(e) = ChannelId::new(channel_id)
        .say(&ctx.http, WELCOME_MESSAGE)
        .await
    {
        tracing::warn!(
            "Failed to send welcome message to guild {}: {:?}",
            guild_id,
            e
        );
    }
}

/// Handles the guild_delete event. Stored data is kept.
pub async fn handle_guild_delete(
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::debug!("Guild {} became unavailable", incomplete.id);
    } else {
        tracing::info!("Removed from guild {}; keeping its data", incomplete.id);
    }
}
