pub mod activity;
pub mod author;
pub mod contents;
pub mod longevity;

use crate::config::ScoringConfig;
use crate::metrics::{age_in_days, commit_frequency};
use chrono::{DateTime, Utc};
use model::github::{CommitData, GitHubRepository, GitHubUser};

/// 所有 Pass 共用的评分输入
#[derive(Debug, Clone, PartialEq)]
pub struct TrustSignals {
    pub followers: i32,
    pub public_repos: i32,
    pub account_age_days: i64,
    pub repo_age_days: i64,
    pub has_description: bool,
    /// GitHub 不直接暴露 README, 以 has_downloads 代替
    pub has_readme: bool,
    pub has_license: bool,
    pub total_commits: usize,
    pub commit_frequency: f64,
}

impl TrustSignals {
    pub fn collect(
        repo: &GitHubRepository,
        commits: &[CommitData],
        author: &GitHubUser,
        now: DateTime<Utc>,
    ) -> Self {
        let repo_age_days = age_in_days(repo.created_at, now);
        Self {
            followers: author.followers.unwrap_or(0),
            public_repos: author.public_repos.unwrap_or(0),
            account_age_days: age_in_days(author.created_at, now),
            repo_age_days,
            has_description: repo.has_description(),
            has_readme: repo.has_downloads,
            has_license: repo.has_license(),
            total_commits: commits.len(),
            commit_frequency: commit_frequency(commits.len(), repo_age_days),
        }
    }
}

pub trait EvaluationPass: Send + Sync {
    fn apply(&self, ctx: &ScoringConfig, signals: &TrustSignals) -> u32;
    fn name(&self) -> &'static str;
}

pub(crate) fn points_if(condition: bool, points: u32) -> u32 {
    if condition {
        points
    } else {
        0
    }
}

#[cfg(test)]
pub(crate) fn full_marks() -> TrustSignals {
    TrustSignals {
        followers: 60,
        public_repos: 15,
        account_age_days: 800,
        repo_age_days: 200,
        has_description: true,
        has_readme: true,
        has_license: true,
        total_commits: 60,
        commit_frequency: 6.0,
    }
}
