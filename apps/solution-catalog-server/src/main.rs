mod config;
mod logging;
mod signals;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solution_catalog::SolutionCatalogModule;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Solution Catalog Server - module catalog and solution registry
#[derive(Parser)]
#[command(name = "solution-catalog-server")]
#[command(about = "Solution Catalog Server - module catalog and solution registry")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (SOLUTION_CATALOG__*) -> 4) CLI overrides
    let mut config = AppConfig::load_layered(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    logging::init_logging(&config.logging, cli.verbose)?;
    tracing::info!("Solution Catalog Server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // Building the module validates the README client settings and seed data.
    SolutionCatalogModule::new(&config.modules.solution_catalog)?;
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let module = SolutionCatalogModule::new(&config.modules.solution_catalog)?;
    let app = module.register_rest(axum::Router::new());

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(signals::shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Solution Catalog Server stopped");
    Ok(())
}
