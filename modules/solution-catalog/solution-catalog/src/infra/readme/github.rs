//! README provider backed by the GitHub REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;
use url::Url;

use crate::config::ReadmeConfig;
use crate::domain::ports::{ReadmeError, ReadmeProvider};

/// Media type asking GitHub to render the README to HTML server-side.
const GITHUB_HTML_MEDIA_TYPE: &str = "application/vnd.github.html+json";

/// Fetches READMEs rendered as GitHub-flavored HTML.
pub struct GithubReadmeProvider {
    client: reqwest::Client,
    api_base_url: String,
    user_agent: String,
}

impl GithubReadmeProvider {
    /// Creates a provider from the README configuration.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the HTTP client cannot be built.
    pub fn new(config: &ReadmeConfig) -> Result<Self, ReadmeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReadmeError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// Extracts `(owner, repo)` from a GitHub repository URL.
///
/// Accepts `https://`, `http://` and scheme-less `github.com/...` forms. Any
/// path after the repository name is ignored, and a `.git` suffix is dropped.
#[must_use]
pub fn parse_github_repository(repository_url: &str) -> Option<(String, String)> {
    let trimmed = repository_url.trim();
    let url = if trimmed.contains("://") {
        Url::parse(trimmed).ok()?
    } else {
        Url::parse(&format!("https://{trimmed}")).ok()?
    };

    match url.host_str()? {
        "github.com" | "www.github.com" => {}
        _ => return None,
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return None;
    }

    Some((owner.to_owned(), repo.to_owned()))
}

#[async_trait]
impl ReadmeProvider for GithubReadmeProvider {
    async fn fetch_readme(&self, repository_url: &str) -> Result<String, ReadmeError> {
        let Some((owner, repo)) = parse_github_repository(repository_url) else {
            debug!(repository_url, "Not a GitHub repository URL, skipping README");
            return Ok(String::new());
        };

        let endpoint = format!("{}/repos/{owner}/{repo}/readme", self.api_base_url);
        let response = self
            .client
            .get(&endpoint)
            .header(ACCEPT, GITHUB_HTML_MEDIA_TYPE)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| ReadmeError::Transport(format!("request to {endpoint} failed: {e}")))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => return Ok(String::new()),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                return Err(ReadmeError::RateLimited {
                    status: status.as_u16(),
                });
            }
            s if !s.is_success() => {
                return Err(ReadmeError::UnexpectedStatus {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let html = response
            .text()
            .await
            .map_err(|e| ReadmeError::Transport(format!("failed to read README body: {e}")))?;

        debug!(%owner, %repo, bytes = html.len(), "Fetched README");
        Ok(format!(r#"<div class="markdown-body">{html}</div>"#))
    }
}
