use crate::config::ScoringConfig;
use crate::pass::{points_if, EvaluationPass, TrustSignals};

/// 提交历史: 周提交频率与提交总数
pub struct Activity;

impl EvaluationPass for Activity {
    fn apply(&self, ctx: &ScoringConfig, signals: &TrustSignals) -> u32 {
        points_if(
            signals.commit_frequency > ctx.activity.commits_per_week,
            ctx.activity.frequency_points,
        ) + points_if(
            signals.total_commits > ctx.activity.total_commits,
            ctx.activity.total_commits_points,
        )
    }

    fn name(&self) -> &'static str {
        "activity_score"
    }
}
