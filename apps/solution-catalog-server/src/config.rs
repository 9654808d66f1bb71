//! Layered server configuration.
//!
//! Sources are merged in order: built-in defaults, the YAML file passed with
//! `--config`, `SOLUTION_CATALOG__*` environment variables, then CLI flags.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use solution_catalog::SolutionCatalogConfig;

/// Prefix of environment variables overriding configuration keys.
///
/// Nested keys are separated by `__`, e.g.
/// `SOLUTION_CATALOG__SERVER__BIND_ADDR=0.0.0.0:8087`.
pub const ENV_PREFIX: &str = "SOLUTION_CATALOG__";

const DEFAULT_PORT: u16 = 8087;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Per-module configuration sections.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ModulesConfig {
    pub solution_catalog: SolutionCatalogConfig,
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong
    /// shape.
    pub fn load_layered(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.bind_addr.set_port(port);
        }
    }

    /// Renders the effective configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}
