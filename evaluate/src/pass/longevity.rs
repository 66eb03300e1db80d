use crate::config::ScoringConfig;
use crate::pass::{points_if, EvaluationPass, TrustSignals};

/// 仓库年龄超过阈值 (默认半年) 加分
pub struct Longevity;

impl EvaluationPass for Longevity {
    fn apply(&self, ctx: &ScoringConfig, signals: &TrustSignals) -> u32 {
        points_if(
            signals.repo_age_days > ctx.longevity.repo_age_days,
            ctx.longevity.repo_age_points,
        )
    }

    fn name(&self) -> &'static str {
        "longevity_score"
    }
}
