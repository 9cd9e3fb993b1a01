use thiserror::Error;

/// Reasons an inbound webhook payload is rejected with 400 Bad Request.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    /// The demo service reported that it failed to produce the asset.
    #[error("Demo service reported failure: {0}")]
    Unsuccessful(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
