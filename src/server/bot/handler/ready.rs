//! Ready event handler for bot initialization.
//!
//! Fired once per connection after the gateway handshake. Registers the global slash
//! commands so they are available in every guild the bot is in.

use serenity::all::{Command, Context, Ready};

use crate::server::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, commands::definitions()).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
