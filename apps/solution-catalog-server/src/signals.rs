use std::fmt;

use anyhow::Result;
use tokio::signal;

/// Signal that ended the serve loop.
#[derive(Debug, Clone, Copy)]
enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CtrlC => f.write_str("ctrl-c"),
            #[cfg(unix)]
            Self::Sigterm => f.write_str("sigterm"),
        }
    }
}

/// Resolves once the process is asked to stop.
///
/// Used as the graceful shutdown trigger of the HTTP server. If signal
/// handlers cannot be installed it falls back to plain Ctrl+C.
pub async fn shutdown_signal() {
    match wait_for_signal().await {
        Ok(signal) => {
            tracing::info!(%signal, "Shutdown signal received, draining connections");
        }
        Err(e) => {
            tracing::error!(error = %e, "Signal handling failed, waiting for Ctrl+C");
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!(error = %e, "Ctrl+C handler failed, shutting down");
            }
        }
    }
}

async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::select! {
        result = wait_ctrl_c() => result,
        result = wait_sigterm() => result,
    }
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    sigterm.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
