mod api;
mod app_state;
mod config;
mod core;
mod debug;
mod domain;
mod errors;
mod logging;
mod routes;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::app_state::build_app_state;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load();
    let _guard = logging::init_tracing(&config);

    let state = build_app_state(config.clone());

    if config.debug_mode {
        return debug::run_debug(&state).await;
    }

    let app = routes::app_router().with_state(state);
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 LogMaster API listening on {}", addr);
    info!("📂 Serving logs from {:?}", config.log_root);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
