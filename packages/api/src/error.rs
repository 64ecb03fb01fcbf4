use thiserror::Error;

/// Failure of a call against the activities API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The configured base URL is unusable.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request rejected ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// The server-provided detail of a rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
