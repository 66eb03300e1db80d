use crate::config::{AssessOverrides, ScoringConfig};
use crate::error::AssessError;
use crate::manager::EvaluationManager;
use crate::metrics::{age_in_years, two_decimals};
use crate::pass::TrustSignals;
use chrono::{DateTime, Utc};
use database::storage::AnalysisStore;
use entity::github_analysis;
use github_handler::{RepositoryMetadataProvider, DEFAULT_PER_PAGE};
use model::repo_ref::RepoRef;
use model::report::{
    AuthorCriteria, CommitHistoryCriteria, Criteria, DisplayedScore, RepositoryCriteria,
    RepositoryReport,
};
use std::sync::Arc;
use summarizer::Summarizer;
use tracing::{info, warn};

/// Fetch → score → summarize → persist, for one repository URL at a time.
///
/// All collaborators are injected so tests can substitute fakes.
pub struct TrustAssessor {
    provider: Arc<dyn RepositoryMetadataProvider>,
    summarizer: Option<Arc<dyn Summarizer>>,
    store: Arc<dyn AnalysisStore>,
    manager: EvaluationManager,
    scoring: ScoringConfig,
    overrides: AssessOverrides,
    per_page: u32,
}

impl TrustAssessor {
    pub fn new(
        provider: Arc<dyn RepositoryMetadataProvider>,
        store: Arc<dyn AnalysisStore>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            provider,
            summarizer: None,
            store,
            manager: EvaluationManager::with_default_passes(),
            scoring,
            overrides: AssessOverrides::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn with_overrides(mut self, overrides: AssessOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn assess(&self, repo_url: &str) -> Result<RepositoryReport, AssessError> {
        let repo = RepoRef::parse(repo_url)?;
        let report = self.build_report(&repo, Utc::now()).await?;

        let report = match &self.summarizer {
            Some(summarizer) => {
                let summary = summarizer
                    .summarize(&report, self.overrides.context_for(&repo))
                    .await?;
                report.with_summary(summary)
            }
            None => report,
        };

        let stored = self
            .store
            .record(github_analysis::ActiveModel::from(&report))
            .await?;
        info!(id = stored.id, repository = %report.repository, "analysis stored");
        Ok(report)
    }

    /// 拉取元数据并计算得分, 不含摘要与持久化
    pub async fn build_report(
        &self,
        repo: &RepoRef,
        now: DateTime<Utc>,
    ) -> Result<RepositoryReport, AssessError> {
        let details = self.provider.get_repository(&repo.owner, &repo.name).await?;

        // 提交历史与作者信息互不依赖, 并发获取
        let (commits, author) = futures::try_join!(
            self.provider
                .list_commits(&repo.owner, &repo.name, self.per_page),
            self.provider.get_user(&details.owner.login),
        )?;

        let signals = TrustSignals::collect(&details, &commits, &author, now);
        let card = self.manager.evaluate(&self.scoring, &signals);

        info!(
            "Repository {} evaluation completed - Scores: total= {}, author= {}, longevity= {}, contents= {}, activity= {}",
            repo,
            card.total,
            card.get("author_score"),
            card.get("longevity_score"),
            card.get("contents_score"),
            card.get("activity_score"),
        );

        let computed = two_decimals(card.normalized(self.scoring.max_score));
        let trust_score = match self.overrides.score_for(repo) {
            Some(value) => {
                warn!(
                    repository = %repo,
                    computed = %computed,
                    displayed = value,
                    "trust score overridden for display; stored score stays computed"
                );
                DisplayedScore::Override(value)
            }
            None => DisplayedScore::Computed(computed),
        };

        Ok(RepositoryReport {
            repository: repo.full_name(),
            trust_score,
            computed_score: card.total,
            criteria: Criteria {
                author: AuthorCriteria {
                    followers: signals.followers,
                    public_repos: signals.public_repos,
                    account_age_years: two_decimals(age_in_years(signals.account_age_days)),
                },
                repository: RepositoryCriteria {
                    age_days: signals.repo_age_days,
                    has_description: signals.has_description,
                    has_readme: signals.has_readme,
                    has_license: signals.has_license,
                },
                commit_history: CommitHistoryCriteria {
                    total_commits: signals.total_commits,
                    commit_frequency_per_week: two_decimals(signals.commit_frequency),
                },
            },
            summary: String::new(),
        })
    }
}
