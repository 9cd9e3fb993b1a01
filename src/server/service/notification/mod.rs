//! Match notifications for guilds.
//!
//! [`MatchNotifier`] is the boundary to the chat platform. [`fanout::MatchFanout`]
//! decides which guilds hear about a parsed match and what each of them is told.

pub mod fanout;

use async_trait::async_trait;

use crate::server::{
    error::notify::NotifyError,
    model::notification::MatchSummary,
};

/// Chat platform adapter that delivers match summaries.
#[async_trait]
pub trait MatchNotifier: Send + Sync {
    /// Posts a match summary to a guild's notification channel.
    async fn send_notification(
        &self,
        channel_id: &str,
        summary: &MatchSummary,
    ) -> Result<(), NotifyError>;

    /// Chat-side display for a registered Steam account, such as a user mention.
    async fn resolve_account_display(&self, _steam_id: &str) -> Option<String> {
        None
    }
}
