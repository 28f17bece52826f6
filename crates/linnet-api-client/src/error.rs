use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Human-readable detail, or `None` when the failure carried none.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            ClientError::InvalidBaseUrl(message)
            | ClientError::Transport(message)
            | ClientError::Decode(message) => message.trim(),
        };
        (!message.is_empty()).then_some(message)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Transport(error.to_string())
        }
    }
}
