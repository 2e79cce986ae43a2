use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::oneshot;
use tracing::{error, info};

use rest_api::{load_rest_api_config, start_server};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_rest_api_config(config_path)?;
    info!(
        host = %config.host,
        port = config.port,
        data_file = %config.data_file.display(),
        "starting graph query REST API"
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        let _ = shutdown_tx.send(());
    });

    start_server(config, shutdown_rx).await
}
