pub mod github_analysis;
