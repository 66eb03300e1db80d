use github_handler::ProviderError;
use model::repo_ref::RepoRefError;
use sea_orm::DbErr;
use summarizer::SummarizerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessError {
    /// Bad or missing repository URL; nothing was fetched.
    #[error(transparent)]
    Validation(#[from] RepoRefError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Summarizer(#[from] SummarizerError),

    #[error("failed to persist analysis: {0}")]
    Persistence(#[from] DbErr),
}

impl AssessError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AssessError::Validation(_))
    }
}
