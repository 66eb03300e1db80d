mod client;
mod error;

pub use client::{GitHubClient, DEFAULT_API_URL, DEFAULT_PER_PAGE};
pub use error::ProviderError;

use async_trait::async_trait;
use model::github::{CommitData, GitHubRepository, GitHubUser};

/// Source of repository, commit and account metadata.
#[async_trait]
pub trait RepositoryMetadataProvider: Send + Sync {
    async fn get_repository(&self, owner: &str, name: &str)
        -> Result<GitHubRepository, ProviderError>;

    /// 拉取全部提交, 按 `per_page` 分页直到最后一页
    async fn list_commits(
        &self,
        owner: &str,
        name: &str,
        per_page: u32,
    ) -> Result<Vec<CommitData>, ProviderError>;

    async fn get_user(&self, login: &str) -> Result<GitHubUser, ProviderError>;
}
