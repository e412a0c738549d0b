// src/main.rs

//! Listing service entry-point.
//!
//! 1. Resolve and load `listing.toml` (defaults when the implicit file is absent)
//! 2. Set up structured logging
//! 3. Bind the listen address and serve `GET /` until Ctrl-C / SIGTERM

use anyhow::Context;
use listing_service::{
    config::config_path,
    server::{serve, AppState},
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1 ─ Config
    let location = config_path()?;
    let cfg = location
        .load()
        .with_context(|| format!("loading {}", location.path.display()))?;

    // 2 ─ Logging
    shared::setup_logging(&cfg.logging).context("logging setup failed")?;
    if location.path.exists() {
        log::info!("Service bootstrap initiated (config {:?})", location.path);
    } else {
        log::info!("Service bootstrap initiated (no config at {:?}, using defaults)", location.path);
    }

    // 3 ─ HTTP
    let listener = TcpListener::bind(cfg.server.listen)
        .await
        .with_context(|| format!("binding {}", cfg.server.listen))?;
    let state = Arc::new(AppState { target_dir: cfg.server.target_dir });

    serve(listener, state).await.context("server error")?;
    log::info!("Service stopped cleanly");
    Ok(())
}
