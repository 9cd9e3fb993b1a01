use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_STEAM_API_BASE_URL: &str = "https://api.steampowered.com";
const DEFAULT_DEMO_SERVICE_BASE_URL: &str = "https://cs-demo-parsing.simonfalke.com";
const DEFAULT_WEBHOOK_BASE_URL: &str = "https://cs-bot.simonfalke.com";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub steam_api_key: String,
    pub steam_api_base_url: String,
    pub demo_service_base_url: String,
    /// Public base URL the demo service calls back into.
    pub webhook_base_url: String,

    pub host: String,
    pub port: u16,

    pub poll_interval: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            steam_api_key: required("STEAM_API_KEY")?,
            steam_api_base_url: optional("STEAM_API_BASE_URL", DEFAULT_STEAM_API_BASE_URL),
            demo_service_base_url: optional("DEMO_SERVICE_BASE_URL", DEFAULT_DEMO_SERVICE_BASE_URL),
            webhook_base_url: optional("WEBHOOK_BASE_URL", DEFAULT_WEBHOOK_BASE_URL),
            host: optional("WEBHOOK_HOST", DEFAULT_HOST),
            port: parsed("WEBHOOK_PORT", DEFAULT_PORT)?,
            poll_interval: Duration::from_secs(parsed(
                "POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )?),
            http_timeout: Duration::from_secs(parsed(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => {
            value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}
