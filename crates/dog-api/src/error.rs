use thiserror::Error;

/// Errors returned by the dog service client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned status {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
