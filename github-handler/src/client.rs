use crate::{ProviderError, RepositoryMetadataProvider};
use async_trait::async_trait;
use model::github::{CommitData, GitHubErrorResponse, GitHubRepository, GitHubUser};
use reqwest::header::{HeaderMap, ACCEPT, LINK};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 50;

const API_VERSION: &str = "2022-11-28";
const MAX_PER_PAGE: u32 = 100;

/// GitHub REST client; one instance is shared by all requests.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(
        token: Option<String>,
        api_url: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let api_url =
            Url::parse(api_url).map_err(|e| ProviderError::InvalidUrl(format!("{api_url}: {e}")))?;
        if api_url.cannot_be_a_base() {
            return Err(ProviderError::InvalidUrl(api_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("repo-trust/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url,
            // 空 token 视为匿名访问
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // cannot_be_a_base 已在构造时排除
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<Response, ProviderError> {
        debug!(%url, "GitHub GET");
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        check_status(request.send().await?).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        self.get(url)
            .await?
            .json()
            .await
            .map_err(ProviderError::Decode)
    }
}

async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let path = response.url().path().to_owned();
    let rate_limit_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        == Some("0");
    let message = response
        .json::<GitHubErrorResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_default();

    Err(match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(message),
        StatusCode::FORBIDDEN if rate_limit_exhausted => ProviderError::RateLimited(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized(message),
        StatusCode::NOT_FOUND => ProviderError::NotFound(path),
        _ => ProviderError::Status {
            status: status.as_u16(),
            message,
        },
    })
}

/// 解析 `Link` 头中 rel="next" 的地址
pub(crate) fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|p| {
            let p = p.trim();
            p == r#"rel="next""# || p == "rel=next"
        });
        if !is_next {
            return None;
        }
        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}

#[async_trait]
impl RepositoryMetadataProvider for GitHubClient {
    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<GitHubRepository, ProviderError> {
        self.get_json(self.endpoint(&["repos", owner, name])).await
    }

    async fn list_commits(
        &self,
        owner: &str,
        name: &str,
        per_page: u32,
    ) -> Result<Vec<CommitData>, ProviderError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let mut url = self.endpoint(&["repos", owner, name, "commits"]);
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());

        let mut commits = Vec::new();
        let mut page = 1;
        loop {
            let response = self.get(url).await?;
            let next = next_page_url(response.headers());
            let batch: Vec<CommitData> = response.json().await.map_err(ProviderError::Decode)?;
            debug!(owner, name, page, fetched = batch.len(), "commit page");
            commits.extend(batch);

            match next {
                Some(next) => {
                    url = next;
                    page += 1;
                }
                None => break,
            }
        }
        Ok(commits)
    }

    async fn get_user(&self, login: &str) -> Result<GitHubUser, ProviderError> {
        self.get_json(self.endpoint(&["users", login])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(link: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(link).unwrap());
        headers
    }

    #[test]
    fn test_next_link_is_found_among_relations() {
        let link = r#"<https://api.github.com/repositories/1/commits?per_page=50&page=2>; rel="next", <https://api.github.com/repositories/1/commits?per_page=50&page=7>; rel="last""#;
        let next = next_page_url(&headers(link)).unwrap();
        assert_eq!(
            next.as_str(),
            "https://api.github.com/repositories/1/commits?per_page=50&page=2"
        );
    }

    #[test]
    fn test_last_page_has_no_next_link() {
        let link = r#"<https://api.github.com/repositories/1/commits?per_page=50&page=1>; rel="first", <https://api.github.com/repositories/1/commits?per_page=50&page=6>; rel="prev""#;
        assert!(next_page_url(&headers(link)).is_none());
        assert!(next_page_url(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client =
            GitHubClient::new(None, "https://api.github.com", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.endpoint(&["repos", "vercel", "next.js"]).as_str(),
            "https://api.github.com/repos/vercel/next.js"
        );
        assert_eq!(
            client.endpoint(&["users", "a b"]).as_str(),
            "https://api.github.com/users/a%20b"
        );
    }

    #[test]
    fn test_blank_token_means_anonymous() {
        let client = GitHubClient::new(
            Some("  ".to_owned()),
            DEFAULT_API_URL,
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(client.token.is_none());
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            GitHubClient::new(None, "not a url", Duration::from_secs(5)),
            Err(ProviderError::InvalidUrl(_))
        ));
    }
}
