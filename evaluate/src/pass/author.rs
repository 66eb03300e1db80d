use crate::config::ScoringConfig;
use crate::pass::{points_if, EvaluationPass, TrustSignals};

/// 作者可信度: 粉丝数, 公开仓库数, 账号年龄
pub struct Author;

impl EvaluationPass for Author {
    fn apply(&self, ctx: &ScoringConfig, signals: &TrustSignals) -> u32 {
        let author = &ctx.author;
        points_if(
            signals.followers > author.followers_threshold,
            author.followers_points,
        ) + points_if(
            signals.public_repos > author.public_repos_threshold,
            author.public_repos_points,
        ) + points_if(
            signals.account_age_days > author.account_age_days,
            author.account_age_points,
        )
    }

    fn name(&self) -> &'static str {
        "author_score"
    }
}
