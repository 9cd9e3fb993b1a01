//! Per-guild delivery of parsed match summaries.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, guild::GuildRepository, user::UserRepository},
    error::{internal::InternalError, AppError},
    model::{
        notification::{FanoutReport, MatchSummary, MemberLine},
        user::User,
    },
};

use super::MatchNotifier;

/// Sends one summary of a parsed match to every guild with a participating member.
///
/// Each guild only sees its own members among the participants. Participants without a
/// registered account are listed for every guild. A guild is claimed by linking the match
/// to it before sending, so a repeated fan-out only reaches guilds that were not notified
/// yet. A guild whose link or delivery fails is logged and skipped, and a failed delivery
/// releases its claim so the next fan-out retries it. The stored match state is not
/// rolled back.
pub struct MatchFanout<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn MatchNotifier,
}

impl<'a> MatchFanout<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn MatchNotifier) -> Self {
        Self { db, notifier }
    }

    /// Links a match to its participants and their guilds, then notifies each guild.
    ///
    /// # Arguments
    /// - `share_code` - Share code of a stored match
    /// - `stats` - Parser output attached to every summary
    ///
    /// # Returns
    /// - `Ok(FanoutReport)` - Guilds delivered to, failed or already notified, and unregistered
    ///   participants
    /// - `Err(AppError::InternalErr)` - Match is not stored
    /// - `Err(AppError::DbErr)` - Database error while resolving recipients
    pub async fn deliver(
        &self,
        share_code: &str,
        stats: Option<serde_json::Value>,
    ) -> Result<FanoutReport, AppError> {
        let game_repo = GameRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let guild_repo = GuildRepository::new(self.db);

        let game = game_repo
            .find_by_share_code(share_code)
            .await?
            .ok_or_else(|| InternalError::MissingGame {
                share_code: share_code.to_string(),
            })?;
        let players = game_repo.get_players(game.id).await?;

        let users = user_repo.find_by_steam_ids(&players).await?;
        let registered: HashSet<&str> = users.iter().map(|u| u.steam_id.as_str()).collect();
        let unregistered: Vec<String> = players
            .iter()
            .filter(|steam_id| !registered.contains(steam_id.as_str()))
            .cloned()
            .collect();

        for user in &users {
            if let Err(e) = user_repo.add_game(user.id, game.id).await {
                tracing::warn!(
                    "Failed to link match {} to account {}: {}",
                    game.share_code,
                    user.steam_id,
                    e
                );
            }
        }

        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let memberships = guild_repo.find_memberships_for_users(&user_ids).await?;

        let mut lines: HashMap<i32, MemberLine> = HashMap::with_capacity(users.len());
        for user in &users {
            lines.insert(user.id, self.member_line(user).await);
        }

        let mut report = FanoutReport {
            unregistered: unregistered.clone(),
            ..Default::default()
        };

        for membership in memberships {
            let guild = membership.guild;

            // The guild's link to the match marks it as notified.
            match guild_repo.add_game(guild.id, game.id).await {
                Ok(true) => {}
                Ok(false) => {
                    report.already_notified.push(guild.guild_id);
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to link match {} to guild {}: {}",
                        game.share_code,
                        guild.guild_id,
                        e
                    );
                    report.failed.push(guild.guild_id);
                    continue;
                }
            }

            let summary = MatchSummary {
                share_code: game.share_code.clone(),
                demo_name: game.demo_name.clone(),
                player_count: players.len(),
                members: membership
                    .user_ids
                    .iter()
                    .filter_map(|id| lines.get(id).cloned())
                    .collect(),
                unregistered: unregistered.clone(),
                stats: stats.clone(),
            };

            match self
                .notifier
                .send_notification(&guild.channel_id, &summary)
                .await
            {
                Ok(()) => report.delivered.push(guild.guild_id),
                Err(e) => {
                    tracing::warn!(
                        "Failed to notify guild {} about match {}: {}",
                        guild.guild_id,
                        game.share_code,
                        e
                    );
                    if let Err(e) = guild_repo.remove_game(guild.id, game.id).await {
                        tracing::error!(
                            "Failed to release match {} for guild {}: {}",
                            game.share_code,
                            guild.guild_id,
                            e
                        );
                    }
                    report.failed.push(guild.guild_id);
                }
            }
        }

        tracing::info!(
            "Match {} delivered to {} guild(s), {} failed, {} already notified, {} unregistered participant(s)",
            game.share_code,
            report.delivered.len(),
            report.failed.len(),
            report.already_notified.len(),
            report.unregistered.len()
        );

        Ok(report)
    }

    async fn member_line(&self, user: &User) -> MemberLine {
        MemberLine {
            steam_id: user.steam_id.clone(),
            display: self.notifier.resolve_account_display(&user.steam_id).await,
        }
    }
}
