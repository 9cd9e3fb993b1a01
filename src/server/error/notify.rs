use thiserror::Error;

/// Failure delivering a notification to a chat destination.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The stored destination is not a usable channel id.
    #[error("Invalid notification destination '{0}'")]
    InvalidDestination(String),

    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for NotifyError {
    fn from(err: serenity::Error) -> Self {
        NotifyError::Discord(Box::new(err))
    }
}
