//! Steam Web API match history client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::server::{
    error::{config::ConfigError, provider::ProviderError},
    model::user::User,
};

use super::{endpoint, parse_response, MatchHistoryApi};

const SERVICE: &str = "Steam API";

#[derive(Debug, Deserialize)]
struct NextCodeResponse {
    result: NextCodeResult,
}

#[derive(Debug, Deserialize)]
struct NextCodeResult {
    #[serde(default)]
    nextcode: String,
}

/// Client for `ICSGOPlayers_730/GetNextMatchSharingCode`.
#[derive(Debug, Clone)]
pub struct SteamWebApi {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl SteamWebApi {
    /// Creates a client against `base_url`, normally `https://api.steampowered.com`.
    ///
    /// # Returns
    /// - `Ok(SteamWebApi)` - Client ready for requests
    /// - `Err(ConfigError::InvalidUrl)` - Base URL cannot be parsed
    pub fn new(client: Client, base_url: &str, api_key: String) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl MatchHistoryApi for SteamWebApi {
    async fn next_share_code(&self, user: &User) -> Result<String, ProviderError> {
        let url = endpoint(
            &self.base_url,
            &["ICSGOPlayers_730", "GetNextMatchSharingCode", "v1"],
            SERVICE,
        )?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", user.steam_id.as_str()),
                ("steamidkey", user.auth_code.as_str()),
                ("knowncode", user.last_share_code.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::transport(SERVICE, source))?;

        let body: NextCodeResponse = parse_response(response, SERVICE).await?;

        Ok(body.result.nextcode)
    }
}
