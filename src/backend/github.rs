//! GitHub REST backend implementation.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;
use std::time::Duration;

use super::{MetadataBackend, RemoteRepository};
use crate::constants::GITHUB_ACCEPT_HEADER;
use crate::error::LookupCause;

/// GitHub backend talking to `{base_url}/repos/{owner}/{repo}`.
pub struct GithubBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl GithubBackend {
    /// Create a new GitHub backend.
    ///
    /// `timeout` bounds the whole request, connection included.
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, LookupCause> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT_HEADER));

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupCause::Transport(e.to_string()))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| LookupCause::Transport(format!("invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupCause::Transport(format!("base URL '{}' cannot hold a path", base_url)));
        }

        Ok(Self { client, base_url })
    }

    /// URL of the repository resource.
    ///
    /// `owner` and `repo` are percent-encoded as single path segments, so `/`,
    /// `?` and `#` cannot redirect the request to another resource.
    pub fn repository_url(&self, owner: &str, repo: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["repos", owner, repo]);
        }
        url
    }
}

#[async_trait]
impl MetadataBackend for GithubBackend {
    fn backend_type(&self) -> &str {
        "github"
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RemoteRepository, LookupCause> {
        let url = self.repository_url(owner, repo);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupCause::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupCause::Status(status.as_u16()));
        }

        response
            .json::<RemoteRepository>()
            .await
            .map_err(|e| LookupCause::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_url_strips_trailing_slash() {
        let backend = GithubBackend::new("https://api.github.com/", "starshelf-test", Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.repository_url("octocat", "Hello-World").as_str(),
            "https://api.github.com/repos/octocat/Hello-World"
        );
        assert_eq!(backend.backend_type(), "github");
    }

    #[test]
    fn test_repository_url_escapes_segments() {
        let backend = GithubBackend::new("https://api.github.com", "starshelf-test", Duration::from_secs(5)).unwrap();
        let url = backend.repository_url("octo/cat", "Hello-World#typo?x=1");
        assert_eq!(url.path(), "/repos/octo%2Fcat/Hello-World%23typo%3Fx=1");
        assert_eq!(url.fragment(), None);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let backend = GithubBackend::new("http://localhost:8080/api/v3/", "starshelf-test", Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.repository_url("octocat", "Hello-World").as_str(),
            "http://localhost:8080/api/v3/repos/octocat/Hello-World"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(GithubBackend::new("not a url", "starshelf-test", Duration::from_secs(5)).is_err());
    }
}
