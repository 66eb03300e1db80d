pub mod assess;
pub mod config;
pub mod error;
pub mod manager;
pub mod metrics;
pub mod pass;

pub use assess::TrustAssessor;
pub use config::{AssessOverrides, RepositoryOverride, ScoringConfig};
pub use error::AssessError;
