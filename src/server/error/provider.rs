use thiserror::Error;

/// Failure talking to the Steam Web API or the demo service.
///
/// The poller logs these and moves on; the deduplicator releases the share code so a
/// later discovery can retry.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a response (connect error, timeout, bad body).
    ///
    /// Built through [`ProviderError::transport`] so the URL never reaches the logs.
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status.
    #[error("{service} returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The service answered `success: false`.
    #[error("{service} rejected the request: {message}")]
    Rejected {
        service: &'static str,
        message: String,
    },

    /// An endpoint URL could not be built from the configured base URL.
    #[error("{service} endpoint could not be built from base URL")]
    InvalidEndpoint { service: &'static str },
}

impl ProviderError {
    /// Wraps a transport failure with the request URL stripped, since request queries
    /// carry the API key and account auth codes.
    pub fn transport(service: &'static str, source: reqwest::Error) -> Self {
        ProviderError::Transport {
            service,
            source: source.without_url(),
        }
    }
}
