//! Narrative summaries of trust reports from a chat-completion model.

mod error;
mod openai;
pub mod prompt;

pub use error::SummarizerError;
pub use openai::{OpenAiConfig, OpenAiSummarizer};

use async_trait::async_trait;
use model::report::RepositoryReport;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Turn a finished report into a short paragraph.
    ///
    /// `context` is appended to the prompt verbatim. It must come from
    /// server-side configuration, never from request input.
    async fn summarize(
        &self,
        report: &RepositoryReport,
        context: Option<&str>,
    ) -> Result<String, SummarizerError>;
}
