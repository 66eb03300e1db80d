use entity::github_analysis;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// 报告中展示的分数: 计算结果 (保留两位小数) 或配置的覆盖值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayedScore {
    Computed(String),
    Override(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCriteria {
    pub followers: i32,
    pub public_repos: i32,
    pub account_age_years: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryCriteria {
    pub age_days: i64,
    pub has_description: bool,
    pub has_readme: bool,
    pub has_license: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitHistoryCriteria {
    pub total_commits: usize,
    pub commit_frequency_per_week: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub author: AuthorCriteria,
    pub repository: RepositoryCriteria,
    pub commit_history: CommitHistoryCriteria,
}

/// Trust assessment of one repository, built once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryReport {
    /// `owner/name`
    pub repository: String,
    pub trust_score: DisplayedScore,
    /// Point total before normalization; this is what gets stored.
    pub computed_score: u32,
    pub criteria: Criteria,
    pub summary: String,
}

impl RepositoryReport {
    pub fn with_summary(self, summary: String) -> Self {
        Self { summary, ..self }
    }
}

// 入库时只保存计算得分, 覆盖值不参与持久化
impl From<&RepositoryReport> for github_analysis::ActiveModel {
    fn from(report: &RepositoryReport) -> Self {
        Self {
            id: NotSet,
            repo: Set(report.repository.clone()),
            score: Set(report.computed_score as i32),
            analysis: Set(report.summary.clone()),
            created_at: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(trust_score: DisplayedScore) -> RepositoryReport {
        RepositoryReport {
            repository: "octocat/Hello-World".to_owned(),
            trust_score,
            computed_score: 80,
            criteria: Criteria {
                author: AuthorCriteria {
                    followers: 12,
                    public_repos: 8,
                    account_age_years: "13.70".to_owned(),
                },
                repository: RepositoryCriteria {
                    age_days: 4990,
                    has_description: true,
                    has_readme: true,
                    has_license: false,
                },
                commit_history: CommitHistoryCriteria {
                    total_commits: 3,
                    commit_frequency_per_week: "0.00".to_owned(),
                },
            },
            summary: String::new(),
        }
    }

    #[test]
    fn test_report_serializes_in_camel_case() {
        let value = serde_json::to_value(sample(DisplayedScore::Computed("80.00".into()))).unwrap();
        assert_eq!(value["trustScore"], json!("80.00"));
        assert_eq!(value["computedScore"], json!(80));
        assert_eq!(value["criteria"]["author"]["publicRepos"], json!(8));
        assert_eq!(value["criteria"]["author"]["accountAgeYears"], json!("13.70"));
        assert_eq!(value["criteria"]["repository"]["ageDays"], json!(4990));
        assert_eq!(value["criteria"]["repository"]["hasReadme"], json!(true));
        assert_eq!(
            value["criteria"]["commitHistory"]["commitFrequencyPerWeek"],
            json!("0.00")
        );
    }

    #[test]
    fn test_override_is_a_number_in_json() {
        let report = sample(DisplayedScore::Override(95.0));
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["trustScore"], json!(95.0));
    }

    #[test]
    fn test_active_model_keeps_computed_score() {
        let report = sample(DisplayedScore::Override(95.0)).with_summary("fine".into());
        let model = github_analysis::ActiveModel::from(&report);
        assert_eq!(model.score, Set(80));
        assert_eq!(model.repo, Set("octocat/Hello-World".to_owned()));
        assert_eq!(model.analysis, Set("fine".to_owned()));
        assert_eq!(model.created_at, NotSet);
    }
}
