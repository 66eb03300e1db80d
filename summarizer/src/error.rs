use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("LLM request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM authentication failed: {0}")]
    Authentication(String),

    #[error("LLM rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("LLM API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid LLM response: {0}")]
    InvalidResponse(String),
}
