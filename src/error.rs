use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    Request { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Request { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Text shown in the blocking notification.
    pub fn message(&self) -> String {
        format!("System Error: {self}")
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history api failed: {0}")]
    Js(String),
    #[error("malformed history entry: {0}")]
    Malformed(#[from] serde_json::Error),
}
