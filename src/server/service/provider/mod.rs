//! Clients for the external services that discover and process matches.
//!
//! The poller talks to the Steam Web API through [`MatchHistoryApi`] and the pipeline
//! talks to the demo service through [`DemoApi`]. Both are traits so the orchestration
//! can be exercised against in-memory fakes.

pub mod demo;
pub mod steam;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{error::provider::ProviderError, model::user::User};

/// Steam reports this in place of a share code when no newer match exists.
pub const NO_NEXT_CODE: &str = "n/a";

/// Source of match history for a linked account.
#[async_trait]
pub trait MatchHistoryApi: Send + Sync {
    /// Returns the share code of the match following the account's last share code.
    ///
    /// The raw value is returned; use [`is_new_match`] to decide whether it is a new match.
    async fn next_share_code(&self, user: &User) -> Result<String, ProviderError>;
}

/// Demo download and parsing service.
#[async_trait]
pub trait DemoApi: Send + Sync {
    /// Asks the service to fetch the demo of a match and call `webhook_url` when it is ready.
    async fn request_download(&self, share_code: &str, webhook_url: &str)
        -> Result<(), ProviderError>;

    /// Asks the service to parse a downloaded demo and call `webhook_url` when it is done.
    async fn request_parse(&self, share_code: &str, webhook_url: &str)
        -> Result<(), ProviderError>;
}

/// Whether a share code reported by Steam is a match the account has not seen.
pub fn is_new_match(next_code: &str, last_share_code: &str) -> bool {
    !next_code.is_empty() && next_code != NO_NEXT_CODE && next_code != last_share_code
}

/// Appends path segments to a base URL, keeping any path the base already has.
pub(crate) fn endpoint(
    base_url: &Url,
    segments: &[&str],
    service: &'static str,
) -> Result<Url, ProviderError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidEndpoint { service })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Checks the status of a response and decodes its JSON body.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
    service: &'static str,
) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            service,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ProviderError::transport(service, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_requires_a_different_real_code() {
        assert!(is_new_match("CSGO-2", "CSGO-1"));
        assert!(!is_new_match("CSGO-1", "CSGO-1"));
        assert!(!is_new_match(NO_NEXT_CODE, "CSGO-1"));
        assert!(!is_new_match("", "CSGO-1"));
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let base = Url::parse("https://demo.example.com/api/").unwrap();

        let url = endpoint(&base, &["getDemo", "CSGO-abc"], "demo service").unwrap();

        assert_eq!(url.as_str(), "https://demo.example.com/api/getDemo/CSGO-abc");
    }

    #[test]
    fn endpoint_rejects_opaque_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();

        let result = endpoint(&base, &["getDemo"], "demo service");

        assert!(matches!(result, Err(ProviderError::InvalidEndpoint { .. })));
    }
}
