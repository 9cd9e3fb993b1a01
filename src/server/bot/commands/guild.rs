//! Guild commands: `/set_channel`, `/stats` and `/matches`.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    Permissions, ResolvedValue,
};

use crate::server::{
    bot::commands::{guild_id, CommandReply},
    error::AppError,
    model::{game::Game, guild::GuildSummary},
    service::guild::GuildService,
};

/// Matches listed by `/matches`.
pub const MATCH_LIST_LIMIT: u64 = 10;

pub fn set_channel_definition() -> CreateCommand {
    CreateCommand::new("set_channel")
        .description("Set the channel for match summaries (Manage Server)")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to post match summaries in; defaults to this channel",
            )
            .channel_types(vec![ChannelType::Text])
            .required(false),
        )
}

pub fn stats_definition() -> CreateCommand {
    CreateCommand::new("stats").description("Show how many accounts and matches this server tracks")
}

pub fn matches_definition() -> CreateCommand {
    CreateCommand::new("matches").description("List the most recent matches tracked in this server")
}

/// Changes where the guild's match summaries are posted.
pub async fn set_channel(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let guild_id = guild_id(command)?;

    let can_manage = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.manage_guild());
    if !can_manage {
        return Err(AppError::BadRequest(
            "You need the Manage Server permission to change the channel".to_string(),
        ));
    }

    let channel_id = command
        .data
        .options()
        .iter()
        .find_map(|option| match &option.value {
            ResolvedValue::Channel(channel) if option.name == "channel" => Some(channel.id),
            _ => None,
        })
        .unwrap_or(command.channel_id);

    let guild = GuildService::new(db)
        .set_channel(&guild_id, &channel_id.get().to_string())
        .await?;

    Ok(CommandReply::public(format!(
        "✅ Match summaries will be posted in <#{}>",
        guild.channel_id
    )))
}

/// Shows member and match counts for the guild.
pub async fn stats(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let guild_id = guild_id(command)?;

    let summary = GuildService::new(db).get_summary(&guild_id).await?;

    Ok(CommandReply::public(format_stats(&summary)))
}

/// Lists the newest matches tracked in the guild.
pub async fn matches(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let guild_id = guild_id(command)?;

    let games = GuildService::new(db)
        .recent_games(&guild_id, MATCH_LIST_LIMIT)
        .await?;

    Ok(CommandReply::public(format_match_list(&games)))
}

/// Renders the `/stats` reply.
pub fn format_stats(summary: &GuildSummary) -> String {
    let channel = if summary.guild.has_placeholder_channel() {
        "not set, use `/set_channel`".to_string()
    } else {
        format!("<#{}>", summary.guild.channel_id)
    };

    format!(
        "**Server stats**\nRegistered accounts: {}\nTracked matches: {}\nSummary channel: {}",
        summary.user_count, summary.game_count, channel
    )
}

/// Renders the `/matches` reply.
pub fn format_match_list(games: &[(Game, u64)]) -> String {
    if games.is_empty() {
        return "No matches have been tracked in this server yet.".to_string();
    }

    let mut lines = vec!["**Recent matches**".to_string()];
    lines.extend(games.iter().map(|(game, players)| {
        format!(
            "• `{}` - {} - {} players",
            game.share_code,
            game.status.as_str(),
            players
        )
    }));

    lines.join("\n")
}
