//! Natal chart HTTP server binary.
//!
//! Opens the ephemeris session, sets up the HTTP router and serves requests
//! until interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin natal-server
//!
//! # Custom port and ephemeris data directory
//! PORT=9000 EPHEMERIS_PATH=/usr/local/share/ephe cargo run --bin natal-server
//!
//! # Settings from a TOML file
//! NATAL_CONFIG=natal.toml cargo run --bin natal-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `EPHEMERIS_PATH`: Ephemeris data search path (default: `.`)
//! - `HOUSE_SYSTEM`: House system (default: placidus)
//! - `NATAL_CONFIG`: Optional TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use natal_chart::config::ServiceConfig;
use natal_chart::ephemeris::Ephemeris;
use natal_chart::http::{create_router, AppState};

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

    info!("Starting natal chart HTTP server");

    let config = ServiceConfig::from_env()?;
    let addr = config.socket_addr()?;

    // One session for the whole process; closed when the last state clone drops
    let ephemeris = Arc::new(Ephemeris::swiss(config.ephemeris_settings()?)?);
    info!(
        "Ephemeris ready (oracle={}, houses={})",
        ephemeris.oracle_name(),
        ephemeris.house_system()
    );

    let state = AppState::new(ephemeris);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
