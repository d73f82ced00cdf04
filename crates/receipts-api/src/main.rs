use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use receipts_api::cli::{render_rules, render_score};
use receipts_api::config::{ConfigSource, ReceiptsConfig};
use receipts_api::tracing_setup::{TracingConfig, init_tracing};
use receipts_api::{AppState, create_app_with_state};
use receipts_calculator::PointsCalculator;
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server (default if no subcommand)
    Serve,
    /// Score a receipt JSON file and print the per-rule breakdown
    Score {
        /// Path to a receipt in the same JSON shape the API accepts
        file: PathBuf,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
        /// Only print the points awarded by this rule
        #[arg(long)]
        rule: Option<String>,
    },
    /// List the points rules
    Explain,
}

#[derive(Parser, Debug)]
#[command(name = "receipts")]
#[command(about = "Receipt processor and loyalty points service", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to $RECEIPTS_CONFIG_PATH or ./receipts.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = ReceiptsConfig::load(cli.config.as_deref())?.apply_env_overrides()?;
            init_tracing(&TracingConfig::from(&config.logging))?;
            start_server(config).await
        }
        Commands::Score { file, json, rule } => {
            print!("{}", render_score(&PointsCalculator::new(), &file, json, rule.as_deref())?);
            Ok(())
        }
        Commands::Explain => {
            print!("{}", render_rules(&PointsCalculator::new()));
            Ok(())
        }
    }
}

async fn start_server(config: ReceiptsConfig) -> anyhow::Result<()> {
    match &config.source {
        ConfigSource::File(path) => info!(path = %path.display(), "Loaded configuration file"),
        ConfigSource::Defaults => warn!("Configuration file not found. Using default configuration."),
    }

    let addr = config.bind_address();
    info!(
        %addr,
        environment = %config.environment.env_type,
        max_body_bytes = config.max_body_bytes(),
        "Configuring web server"
    );

    let state = AppState::new();
    let app = create_app_with_state(state.clone(), config.max_body_bytes());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Receipt processor listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!(
        uptime_seconds = state.elapsed().as_secs(),
        stored_receipts = state.store.len(),
        "Server stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
