//! Structured notification content produced by the fan-out and rendered by the chat adapter.

/// Registered participant shown in a guild's match summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberLine {
    pub steam_id: String,
    /// Chat-side display for the account, when the adapter can resolve one.
    pub display: Option<String>,
}

impl MemberLine {
    /// Display text, falling back to the Steam ID.
    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.steam_id)
    }
}

/// Summary of a parsed match for a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub share_code: String,
    pub demo_name: String,
    /// Number of known participants in the match, registered or not.
    pub player_count: usize,
    /// Participants who are members of the receiving guild.
    pub members: Vec<MemberLine>,
    /// Participants with no registered account.
    pub unregistered: Vec<String>,
    /// Opaque parser output.
    pub stats: Option<serde_json::Value>,
}

/// Outcome of fanning a parsed match out to guilds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanoutReport {
    /// Guild ids that received the summary.
    pub delivered: Vec<String>,
    /// Guild ids whose delivery failed.
    pub failed: Vec<String>,
    /// Guild ids skipped because an earlier fan-out already notified them.
    pub already_notified: Vec<String>,
    /// Participants with no registered account.
    pub unregistered: Vec<String>,
}
