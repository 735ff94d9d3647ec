//! Dashboard HTTP Server Binary
//!
//! Loads the three category datasets, sets up the HTTP router and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! DATA_DIR=./data cargo run --bin ytdash-server
//! ```
//!
//! # Environment Variables
//!
//! - `YTDASH_CONFIG`: Path to a `dashboard.toml` (default: searched in `.`, `backend/`, `..`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_DIR`: Directory holding `gaming.csv`, `movies.csv`, `music.csv`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ytdash::db::{DashboardConfig, RepositoryFactory};
use ytdash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting dashboard HTTP server");

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;
    info!(
        data_dir = %config.datasets.data_dir.display(),
        "Loading category datasets"
    );

    // A dataset that fails to load stops the process before any request is served
    let repository = RepositoryFactory::load_from_config(&config)
        .context("Failed to load category datasets")?;
    info!(
        datasets = repository.list_datasets().len(),
        "Repository initialized successfully"
    );

    let state = AppState::from_config(repository, &config);
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
