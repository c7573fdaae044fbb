use thiserror::Error;

/// Transport-level failure talking to the scoring API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("server did not apply the change: {0}")]
    Unconfirmed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// What the round scorer reports back to its caller.
///
/// `Fetch` covers a failed full-round load, `Update` a failed stroke or
/// status update. Neither is fatal: the scorer keeps its last good state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorerError {
    #[error("failed to load round: {0}")]
    Fetch(ApiError),
    #[error("failed to update round: {0}")]
    Update(ApiError),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("could not read session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse session file: {0}")]
    Parse(#[from] serde_json::Error),
}
