use thiserror::Error;

/// Failure talking to the GitHub REST API. Never retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode GitHub response: {0}")]
    Decode(reqwest::Error),

    #[error("GitHub authentication failed: {0}")]
    Unauthorized(String),

    #[error("GitHub API rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("GitHub resource not found: {0}")]
    NotFound(String),

    #[error("GitHub API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid GitHub API url: {0}")]
    InvalidUrl(String),
}
