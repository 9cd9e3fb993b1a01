use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client and returns it together with its HTTP client.
///
/// The HTTP client is returned separately so the notifier can post messages while the
/// gateway connection runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its shared HTTP client
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway.
///
/// Blocks until every shard has shut down, so it should be called from within a
/// `tokio::spawn` task.
///
/// # Returns
/// - `Ok(())` - Shards shut down
/// - `Err(AppError::DiscordErr)` - Connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
