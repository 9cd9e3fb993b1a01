//! Discord delivery of match summaries.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp};
use serenity::http::Http;

use crate::server::{
    data::user::UserRepository,
    error::notify::NotifyError,
    model::notification::MatchSummary,
    service::notification::MatchNotifier,
    util::parse::parse_snowflake,
};

static SUMMARY_COLOR: u32 = 0x00ff00;

/// Discord limits embed field values to 1024 characters.
const FIELD_VALUE_LIMIT: usize = 1024;

/// Posts match summaries as embeds through the bot's HTTP client.
pub struct DiscordNotifier {
    http: Arc<Http>,
    db: DatabaseConnection,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, db: DatabaseConnection) -> Self {
        Self { http, db }
    }
}

#[async_trait]
impl MatchNotifier for DiscordNotifier {
    async fn send_notification(
        &self,
        channel_id: &str,
        summary: &MatchSummary,
    ) -> Result<(), NotifyError> {
        let channel = parse_snowflake(channel_id)
            .map(ChannelId::new)
            .ok_or_else(|| NotifyError::InvalidDestination(channel_id.to_string()))?;

        let message = CreateMessage::new().embed(build_summary_embed(summary));
        channel.send_message(&self.http, message).await?;

        Ok(())
    }

    /// Mentions the Discord user who registered the account.
    async fn resolve_account_display(&self, steam_id: &str) -> Option<String> {
        match UserRepository::new(&self.db).find_by_steam_id(steam_id).await {
            Ok(user) => user
                .and_then(|user| user.discord_user_id)
                .and_then(|id| parse_snowflake(&id))
                .map(|id| format!("<@{}>", id)),
            Err(e) => {
                tracing::warn!("Failed to look up account {}: {}", steam_id, e);
                None
            }
        }
    }
}

/// Builds the embed posted for a parsed match.
pub fn build_summary_embed(summary: &MatchSummary) -> CreateEmbed {
    let demo_name = if summary.demo_name.is_empty() {
        "unavailable"
    } else {
        summary.demo_name.as_str()
    };

    let mut embed = CreateEmbed::new()
        .title("CS Match Summary")
        .color(SUMMARY_COLOR)
        .field("Share Code", format!("`{}`", summary.share_code), true)
        .field("Demo File", format!("`{}`", demo_name), true)
        .field(
            "Players",
            format!("{} players", summary.player_count),
            true,
        );

    if !summary.members.is_empty() {
        let members: Vec<&str> = summary.members.iter().map(|m| m.label()).collect();
        embed = embed.field("Registered Players", field_list(&members), false);
    }

    if !summary.unregistered.is_empty() {
        let unregistered: Vec<&str> = summary.unregistered.iter().map(String::as_str).collect();
        embed = embed.field("Unregistered", field_list(&unregistered), false);
    }

    if summary.stats.is_some() {
        embed = embed.field("Stats", "📊 Match statistics available", false);
    }

    embed
        .footer(CreateEmbedFooter::new("Match analysis completed"))
        .timestamp(Timestamp::now())
}

/// One item per line, cut short with a count of the omitted items if it would not fit
/// in a field.
fn field_list(items: &[&str]) -> String {
    let mut value = String::new();

    for (shown, item) in items.iter().enumerate() {
        let rest = items.len() - shown;
        let suffix = format!("... and {} more", rest);
        if value.len() + item.len() + 1 + suffix.len() + 1 > FIELD_VALUE_LIMIT {
            value.push_str(&suffix);
            return value;
        }
        value.push_str(item);
        value.push('\n');
    }

    value.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::server::model::notification::MemberLine;

    fn summary() -> MatchSummary {
        MatchSummary {
            share_code: "CSGO-abc".to_string(),
            demo_name: "/demos/abc.dem".to_string(),
            player_count: 3,
            members: vec![
                MemberLine {
                    steam_id: "100".to_string(),
                    display: Some("<@42>".to_string()),
                },
                MemberLine {
                    steam_id: "200".to_string(),
                    display: None,
                },
            ],
            unregistered: vec!["300".to_string()],
            stats: None,
        }
    }

    fn field<'a>(embed: &'a Value, name: &str) -> Option<&'a Value> {
        embed["fields"]
            .as_array()
            .and_then(|fields| fields.iter().find(|f| f["name"] == name))
            .map(|f| &f["value"])
    }

    #[test]
    fn summary_lists_members_and_unregistered() {
        let embed = serde_json::to_value(build_summary_embed(&summary())).unwrap();

        assert_eq!(embed["title"], "CS Match Summary");
        assert_eq!(field(&embed, "Share Code").unwrap(), "`CSGO-abc`");
        assert_eq!(field(&embed, "Players").unwrap(), "3 players");
        assert_eq!(field(&embed, "Registered Players").unwrap(), "<@42>\n200");
        assert_eq!(field(&embed, "Unregistered").unwrap(), "300");
        assert!(field(&embed, "Stats").is_none());
    }

    #[test]
    fn summary_marks_available_stats() {
        let mut summary = summary();
        summary.stats = Some(serde_json::json!({ "rounds": 24 }));
        summary.unregistered.clear();

        let embed = serde_json::to_value(build_summary_embed(&summary)).unwrap();

        assert!(field(&embed, "Stats").is_some());
        assert!(field(&embed, "Unregistered").is_none());
    }

    #[test]
    fn long_lists_are_truncated() {
        let ids: Vec<String> = (0..200).map(|i| format!("7656119{:010}", i)).collect();
        let items: Vec<&str> = ids.iter().map(String::as_str).collect();

        let value = field_list(&items);

        assert!(value.len() <= FIELD_VALUE_LIMIT);
        assert!(value.ends_with("more"));
    }
}
