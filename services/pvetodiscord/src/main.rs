//! pvetodiscord CLI
//!
//! Command-line interface for the Proxmox VE to Discord notification relay.

use std::path::PathBuf;

use clap::Parser;
use pvetodiscord::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pvetodiscord")]
#[command(about = "Relays Proxmox VE webhook notifications to Discord")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for persisted reports (overrides config file)
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, logs_dir={:?}, log_level={:?}",
        args.config,
        args.port,
        args.logs_dir,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(logs_dir) = args.logs_dir {
        config.logs.directory = logs_dir;
    }

    tracing::info!("Starting pvetodiscord relay");
    pvetodiscord::run(config).await?;

    Ok(())
}
