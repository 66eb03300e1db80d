use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// `owner/name` 的最大长度, 与 github_analysis.repo 列宽一致
pub const MAX_FULL_NAME_LEN: usize = 100;

// https://github.com/owner/repo(.git)(/) 或 git@github.com:owner/repo(.git)
static GITHUB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:https?://)?(?:www\.)?github\.com/|git@github\.com:)([^/\s]+)/([^/\s]+?)(?:\.git)?/?$",
    )
    .expect("valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoRefError {
    #[error("Missing repository URL")]
    Missing,
    #[error("Invalid GitHub URL: {0}")]
    Invalid(String),
    #[error("Repository name exceeds {MAX_FULL_NAME_LEN} characters: {0}")]
    TooLong(String),
}

/// A repository on GitHub, identified by owner login and repository name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(url: &str) -> Result<Self, RepoRefError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RepoRefError::Missing);
        }

        let captures = GITHUB_URL
            .captures(url)
            .ok_or_else(|| RepoRefError::Invalid(url.to_owned()))?;
        let repo = RepoRef {
            owner: captures[1].to_owned(),
            name: captures[2].to_owned(),
        };

        if repo.full_name().len() > MAX_FULL_NAME_LEN {
            return Err(RepoRefError::TooLong(repo.full_name()));
        }
        Ok(repo)
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(url: &str) -> (String, String) {
        let repo = RepoRef::parse(url).unwrap();
        (repo.owner, repo.name)
    }

    #[test]
    fn test_https_urls() {
        let expected = ("rust-lang".to_owned(), "cargo".to_owned());
        assert_eq!(parsed("https://github.com/rust-lang/cargo"), expected);
        assert_eq!(parsed("https://github.com/rust-lang/cargo.git"), expected);
        assert_eq!(parsed("https://github.com/rust-lang/cargo/"), expected);
        assert_eq!(parsed("http://www.github.com/rust-lang/cargo"), expected);
        assert_eq!(parsed("github.com/rust-lang/cargo"), expected);
        assert_eq!(parsed("  https://github.com/rust-lang/cargo \n"), expected);
    }

    #[test]
    fn test_ssh_url() {
        assert_eq!(
            parsed("git@github.com:tokio-rs/tokio.git"),
            ("tokio-rs".to_owned(), "tokio".to_owned())
        );
    }

    #[test]
    fn test_dotted_repository_name() {
        assert_eq!(
            parsed("https://github.com/vercel/next.js"),
            ("vercel".to_owned(), "next.js".to_owned())
        );
    }

    #[test]
    fn test_rejects_malformed_urls() {
        assert_eq!(RepoRef::parse(""), Err(RepoRefError::Missing));
        assert_eq!(RepoRef::parse("   "), Err(RepoRefError::Missing));
        for url in [
            "rust-lang",
            "rust-lang/cargo",
            "https://github.com/rust-lang",
            "https://gitlab.com/rust-lang/cargo",
            "https://mygithub.com/rust-lang/cargo",
            "https://evil.io/github.com/rust-lang/cargo",
            "git@github.com/rust-lang/cargo",
            "https://github.com/rust-lang/cargo/tree/master",
        ] {
            assert!(
                matches!(RepoRef::parse(url), Err(RepoRefError::Invalid(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_names_wider_than_column() {
        let url = format!("https://github.com/owner/{}", "x".repeat(100));
        assert!(matches!(
            RepoRef::parse(&url),
            Err(RepoRefError::TooLong(_))
        ));
    }

    #[test]
    fn test_display_is_full_name() {
        let repo = RepoRef::parse("https://github.com/serde-rs/serde").unwrap();
        assert_eq!(repo.to_string(), "serde-rs/serde");
        assert_eq!(repo.full_name(), "serde-rs/serde");
    }
}
