//! Configuration for the Solution Catalog module.

use serde::{Deserialize, Serialize};

/// Configuration for the Solution Catalog module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct SolutionCatalogConfig {
    /// README lookup settings.
    pub readme: ReadmeConfig,
}

/// Settings for fetching module READMEs from GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ReadmeConfig {
    /// When `false`, READMEs are never fetched and always come back empty.
    pub enabled: bool,

    /// Base URL of the GitHub REST API.
    /// Default: `https://api.github.com`
    pub api_base_url: String,

    /// Request timeout in seconds.
    /// Default: `10`
    pub timeout_secs: u64,

    /// `User-Agent` header sent to GitHub (required by its API).
    pub user_agent: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base_url: "https://api.github.com".to_owned(),
            timeout_secs: 10,
            user_agent: concat!("solution-catalog/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
