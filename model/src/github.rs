use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub用户信息结构 (GET /users/{username})
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    pub avatar_url: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub public_repos: Option<i32>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub user_type: String,
}

// 仓库信息结构 (GET /repos/{owner}/{repo})
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GitHubRepository {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_downloads: bool,
    pub license: Option<LicenseInfo>,
    pub owner: RepositoryOwner,
}

impl GitHubRepository {
    pub fn has_description(&self) -> bool {
        self.description
            .as_ref()
            .map_or(false, |text| !text.is_empty())
    }

    pub fn has_license(&self) -> bool {
        self.license.is_some()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LicenseInfo {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RepositoryOwner {
    pub login: String,
    pub id: i64,
    #[serde(rename = "type")]
    pub owner_type: String,
}

// 解析提交数据 (GET /repos/{owner}/{repo}/commits)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommitAuthor {
    pub login: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommitInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommitDetail {
    pub author: Option<CommitInfo>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommitData {
    pub sha: String,
    pub author: Option<CommitAuthor>,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct GitHubErrorResponse {
    #[serde(default)]
    pub message: String,
    pub documentation_url: Option<String>,
}
