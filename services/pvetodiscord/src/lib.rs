//! pvetodiscord - Proxmox VE to Discord notification relay
//!
//! Accepts webhook notifications from Proxmox VE, condenses backup reports,
//! keeps the full report on disk and forwards a Discord embed.

pub mod config;
pub mod error;
pub mod formatter;
pub mod io;
pub mod payload;
pub mod persister;
pub mod request;
pub mod server;
pub mod severity;
pub mod summarizer;

pub use config::{load_config, Config};
pub use error::{RelayError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::formatter::Formatter;
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::persister::FsLogPersister;
use crate::server::AppState;

/// Assemble handler state from configuration
pub fn build_state(config: &Config, http: Arc<dyn HttpClient>) -> AppState {
    let persister = Arc::new(FsLogPersister::new(&config.logs.directory));
    AppState {
        formatter: Arc::new(Formatter::new(config.formatter.clone(), persister)),
        http,
        request_fields: Arc::new(config.request_fields.clone()),
        logs_dir: Arc::new(config.logs.directory.clone()),
    }
}

/// Bind the configured address
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    TcpListener::bind(&addr)
        .await
        .map_err(|e| RelayError::Config(format!("Failed to bind {}: {}", addr, e)))
}

/// Serve requests on `listener` until `cancel` fires
pub async fn serve(config: Config, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
    tokio::fs::create_dir_all(&config.logs.directory).await?;

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let state = build_state(&config, http);
    let router = server::build_router(state, &config.server);

    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(
        "Listening on http://{} (logs in {:?})",
        addr,
        config.logs.directory
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Run the relay with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let listener = bind(&config).await?;
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(config, listener, cancel).await
}
