//! Output ports (interfaces) for domain services.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of the README collaborator. Never surfaced to catalog callers.
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// The upstream API refused the request because of rate limiting.
    #[error("README provider rate limited (status {status})")]
    RateLimited { status: u16 },

    /// The upstream API answered with an unexpected status.
    #[error("README provider returned status {status}")]
    UnexpectedStatus { status: u16 },

    /// The request could not be sent or the body could not be read.
    #[error("README provider transport error: {0}")]
    Transport(String),
}

/// Port for fetching a rendered README for a source repository.
#[async_trait]
pub trait ReadmeProvider: Send + Sync {
    /// Returns the README of the repository at `repository_url` rendered as HTML.
    ///
    /// An empty string means the repository has no README or the URL is not
    /// one this provider understands.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadmeError`] when the upstream API cannot be reached or
    /// answers with a failure status.
    async fn fetch_readme(&self, repository_url: &str) -> Result<String, ReadmeError>;
}
