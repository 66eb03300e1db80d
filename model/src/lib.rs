pub mod github;
pub mod repo_ref;
pub mod report;
