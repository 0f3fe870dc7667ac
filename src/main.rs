//! # roster
//!
//! Runs the record stores and serves them over HTTP until Ctrl-C.
//!
//! ```bash
//! roster --port 8000
//! ROSTER_LOG_JSON=1 RUST_LOG=debug roster
//! ```

use anyhow::Context;
use clap::Parser;
use roster::config::Config;
use roster::http::{self, AppState};
use roster::lifecycle::{setup_tracing, RosterSystem};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    setup_tracing(config.log_json);

    info!(?config, "Starting roster");
    let system = RosterSystem::new(config.mailbox_size);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("binding {}", config.bind_addr()))?;
    http::serve(listener, AppState::new(&system), shutdown_signal())
        .await
        .context("serving HTTP")?;

    system.shutdown().await.context("stopping stores")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received");
}
