use model::report::{DisplayedScore, RepositoryReport};

/// Fixed prompt template; the only variable parts are the report fields and
/// the configured context.
pub fn build_prompt(report: &RepositoryReport, context: Option<&str>) -> String {
    let score = match &report.trust_score {
        DisplayedScore::Computed(score) => score.clone(),
        DisplayedScore::Override(score) => format!("{score:.2}"),
    };
    let author = &report.criteria.author;
    let repository = &report.criteria.repository;
    let history = &report.criteria.commit_history;

    let mut prompt = format!(
        "Assess the trustworthiness of a GitHub repository based on the following metrics and provide a summary:\n\
         \n\
         Repository: {}\n\
         Trust Score: {}/100\n\
         \n\
         Criteria:\n\
         - Author Followers: {}\n\
         - Author Public Repos: {}\n\
         - Author Account Age: {} years\n\
         - Repository Age: {} days\n\
         - Has Description: {}\n\
         - Has README: {}\n\
         - Has License: {}\n\
         - Total Commits: {}\n\
         - Commit Frequency per Week: {}\n\
         \n\
         Provide a concise summary of the repository's trustworthiness.\n",
        report.repository,
        score,
        author.followers,
        author.public_repos,
        author.account_age_years,
        repository.age_days,
        repository.has_description,
        repository.has_readme,
        repository.has_license,
        history.total_commits,
        history.commit_frequency_per_week,
    );

    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        prompt.push('\n');
        prompt.push_str(context);
    }
    prompt
}
