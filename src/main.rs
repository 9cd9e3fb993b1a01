mod model;
mod server;

use std::sync::Arc;

use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    router,
    scheduler::match_poller::{self, MatchPoller},
    service::{
        pipeline::{CallbackUrls, MatchPipeline},
        provider::{demo::DemoServiceClient, steam::SteamWebApi},
    },
    shutdown::shutdown_signal,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;

    tracing::info!("Starting server");

    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let notifier = Arc::new(bot::notifier::DiscordNotifier::new(
        discord_http,
        db.clone(),
    ));
    let steam = Arc::new(SteamWebApi::new(
        http_client.clone(),
        &config.steam_api_base_url,
        config.steam_api_key.clone(),
    )?);
    let demo_api = Arc::new(DemoServiceClient::new(
        http_client,
        &config.demo_service_base_url,
    )?);
    let callbacks = CallbackUrls::from_base(&config.webhook_base_url)?;

    let pipeline = MatchPipeline::new(db.clone(), demo_api, notifier, callbacks);
    let poller = MatchPoller::new(steam, pipeline.clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poll_interval = config.poll_interval;
    let scheduler_task = tokio::spawn(async move {
        if let Err(e) = match_poller::start_scheduler(poller, poll_interval, shutdown_rx).await {
            tracing::error!("Match poll scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, pipeline))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped, waiting for the current poll cycle");

    let _ = shutdown_tx.send(true);
    if let Err(e) = scheduler_task.await {
        tracing::error!("Match poll scheduler task failed: {}", e);
    }

    shard_manager.shutdown_all().await;
    if let Err(e) = bot_task.await {
        tracing::error!("Discord bot task failed: {}", e);
    }

    tracing::info!("Shutdown complete");

    Ok(())
}
