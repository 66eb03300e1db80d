use model::repo_ref::RepoRef;
use serde::Deserialize;

/// 评价算法阈值与分值配置, 默认值即标准加分表
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub max_score: u32,
    pub author: AuthorConfig,
    pub longevity: LongevityConfig,
    pub contents: ContentsConfig,
    pub activity: ActivityConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthorConfig {
    pub followers_threshold: i32,
    pub followers_points: u32,
    pub public_repos_threshold: i32,
    pub public_repos_points: u32,
    pub account_age_days: i64,
    pub account_age_points: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LongevityConfig {
    pub repo_age_days: i64,
    pub repo_age_points: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContentsConfig {
    pub description_points: u32,
    pub readme_points: u32,
    pub license_points: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ActivityConfig {
    pub commits_per_week: f64,
    pub frequency_points: u32,
    pub total_commits: usize,
    pub total_commits_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_score: 100,
            author: AuthorConfig::default(),
            longevity: LongevityConfig::default(),
            contents: ContentsConfig::default(),
            activity: ActivityConfig::default(),
        }
    }
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            followers_threshold: 50,
            followers_points: 20,
            public_repos_threshold: 10,
            public_repos_points: 10,
            account_age_days: 365 * 2,
            account_age_points: 10,
        }
    }
}

impl Default for LongevityConfig {
    fn default() -> Self {
        Self {
            repo_age_days: 180,
            repo_age_points: 10,
        }
    }
}

impl Default for ContentsConfig {
    fn default() -> Self {
        Self {
            description_points: 10,
            readme_points: 10,
            license_points: 10,
        }
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            commits_per_week: 5.0,
            frequency_points: 10,
            total_commits: 50,
            total_commits_points: 10,
        }
    }
}

/// One allowlisted repository with server-side overrides.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RepositoryOverride {
    /// `owner/name`, matched case-insensitively.
    pub repo: String,
    /// Extra prompt text for the summarizer.
    pub context: Option<String>,
    /// Replaces the displayed trust score; the stored score is unaffected.
    pub score: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AssessOverrides {
    pub repositories: Vec<RepositoryOverride>,
}

impl AssessOverrides {
    pub fn context_for(&self, repo: &RepoRef) -> Option<&str> {
        self.find(repo).and_then(|o| o.context.as_deref())
    }

    pub fn score_for(&self, repo: &RepoRef) -> Option<f64> {
        self.find(repo).and_then(|o| o.score)
    }

    fn find(&self, repo: &RepoRef) -> Option<&RepositoryOverride> {
        let full_name = repo.full_name();
        self.repositories
            .iter()
            .find(|o| o.repo.eq_ignore_ascii_case(&full_name))
    }
}
