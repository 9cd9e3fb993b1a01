//! Discord bot integration for guild tracking, slash commands and match notifications.
//!
//! The bot is initialized during server startup and runs in a separate tokio task so it
//! does not block the HTTP server. Its HTTP client is shared with [`notifier::DiscordNotifier`]
//! which posts match summaries without maintaining a second connection to Discord.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required: guild availability events carry the channels used to pick a
//! notification channel, and slash command interactions are delivered without further
//! intents.

pub mod commands;
pub mod handler;
pub mod notifier;
pub mod start;
