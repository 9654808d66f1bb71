use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Each `-v` raises the
/// configured level one step (info, debug, trace) but never lowers it.
///
/// # Errors
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<()> {
    let directive = filter_directive(&cfg.level, verbose);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&directive)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match cfg.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()?,
    }
    Ok(())
}

fn filter_directive(configured: &str, verbose: u8) -> String {
    let (requested, name) = match verbose {
        0 => return configured.to_owned(),
        1 => (LevelFilter::INFO, "info"),
        2 => (LevelFilter::DEBUG, "debug"),
        _ => (LevelFilter::TRACE, "trace"),
    };

    match configured.parse::<LevelFilter>() {
        Ok(level) if level >= requested => configured.to_owned(),
        _ => name.to_owned(),
    }
}
