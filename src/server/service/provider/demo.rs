//! Demo download and parsing service client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::error::{config::ConfigError, provider::ProviderError};

use super::{endpoint, parse_response, DemoApi};

const SERVICE: &str = "demo service";

#[derive(Debug, Serialize)]
struct DemoRequest<'a> {
    webhook_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct DemoResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Client for the `getDemo` and `parseDemo` endpoints.
#[derive(Debug, Clone)]
pub struct DemoServiceClient {
    client: Client,
    base_url: Url,
}

impl DemoServiceClient {
    /// Creates a client against the demo service at `base_url`.
    ///
    /// # Returns
    /// - `Ok(DemoServiceClient)` - Client ready for requests
    /// - `Err(ConfigError::InvalidUrl)` - Base URL cannot be parsed
    pub fn new(client: Client, base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    async fn post(
        &self,
        operation: &str,
        share_code: &str,
        webhook_url: &str,
    ) -> Result<(), ProviderError> {
        let url = endpoint(&self.base_url, &[operation, share_code], SERVICE)?;

        let response = self
            .client
            .post(url)
            .json(&DemoRequest { webhook_url })
            .send()
            .await
            .map_err(|source| ProviderError::transport(SERVICE, source))?;

        let body: DemoResponse = parse_response(response, SERVICE).await?;

        if !body.success {
            return Err(ProviderError::Rejected {
                service: SERVICE,
                message: body.message,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl DemoApi for DemoServiceClient {
    async fn request_download(
        &self,
        share_code: &str,
        webhook_url: &str,
    ) -> Result<(), ProviderError> {
        self.post("getDemo", share_code, webhook_url).await
    }

    async fn request_parse(&self, share_code: &str, webhook_url: &str) -> Result<(), ProviderError> {
        self.post("parseDemo", share_code, webhook_url).await
    }
}
