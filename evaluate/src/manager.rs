use crate::config::ScoringConfig;
use crate::pass::activity::Activity;
use crate::pass::author::Author;
use crate::pass::contents::Contents;
use crate::pass::longevity::Longevity;
use crate::pass::{EvaluationPass, TrustSignals};
use std::sync::Arc;

/// 各 Pass 的得分及总分
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub total: u32,
    pub passes: Vec<(&'static str, u32)>,
}

impl ScoreCard {
    pub fn get(&self, name: &str) -> u32 {
        self.passes
            .iter()
            .find(|(pass, _)| *pass == name)
            .map_or(0, |(_, score)| *score)
    }

    /// total / max × 100. Not clamped: the default point table already sums to 100.
    pub fn normalized(&self, max_score: u32) -> f64 {
        if max_score == 0 {
            return 0.0;
        }
        self.total as f64 / max_score as f64 * 100.0
    }
}

#[derive(Clone)]
pub struct EvaluationManager {
    passes: Vec<Arc<dyn EvaluationPass>>,
}

impl EvaluationManager {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn with_default_passes() -> Self {
        let mut manager = Self::new();
        manager.add_default_passes();
        manager
    }

    pub fn add_default_passes(&mut self) {
        self.add_pass(Arc::new(Author));
        self.add_pass(Arc::new(Longevity));
        self.add_pass(Arc::new(Contents));
        self.add_pass(Arc::new(Activity));
    }

    pub fn add_pass(&mut self, pass: Arc<dyn EvaluationPass>) {
        self.passes.push(pass);
    }

    pub fn evaluate(&self, ctx: &ScoringConfig, signals: &TrustSignals) -> ScoreCard {
        let passes: Vec<(&'static str, u32)> = self
            .passes
            .iter()
            .map(|pass| (pass.name(), pass.apply(ctx, signals)))
            .collect();
        let total = passes.iter().map(|(_, score)| score).sum();
        ScoreCard { total, passes }
    }
}
