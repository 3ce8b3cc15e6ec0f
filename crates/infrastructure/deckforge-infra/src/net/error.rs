#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid service url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx answer. Displays only the server's message (or the endpoint default).
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidUrl,
    Transport,
    Rejected,
    Decode,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::InvalidUrl { .. } => ApiErrorKind::InvalidUrl,
            ApiError::Transport(_) => ApiErrorKind::Transport,
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
        }
    }
}
