//! README providers.

mod github;

use async_trait::async_trait;

use crate::domain::ports::{ReadmeError, ReadmeProvider};

pub use github::{GithubReadmeProvider, parse_github_repository};

/// Provider used when README fetching is disabled. Always returns nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReadmeProvider;

#[async_trait]
impl ReadmeProvider for NoopReadmeProvider {
    async fn fetch_readme(&self, _repository_url: &str) -> Result<String, ReadmeError> {
        Ok(String::new())
    }
}
