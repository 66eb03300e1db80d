use crate::config::ScoringConfig;
use crate::pass::{points_if, EvaluationPass, TrustSignals};

pub struct Contents;

impl EvaluationPass for Contents {
    fn apply(&self, ctx: &ScoringConfig, signals: &TrustSignals) -> u32 {
        points_if(signals.has_description, ctx.contents.description_points)
            + points_if(signals.has_readme, ctx.contents.readme_points)
            + points_if(signals.has_license, ctx.contents.license_points)
    }

    fn name(&self) -> &'static str {
        "contents_score"
    }
}
