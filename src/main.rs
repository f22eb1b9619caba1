mod app;
mod config;
mod errors;
mod feed;
mod handlers;
mod middleware;
mod models;
mod preflight;
mod services;

use std::sync::Arc;
use anyhow::Context;
use tracing_subscriber::EnvFilter;
use crate::{
    app::{build_router, AppState},
    config::Config,
    services::{RandomMetrics, WorkflowManager},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("VabHub starting");

    let config = Config::load().context("Failed to load configuration")?;
    tracing::debug!("Loaded configuration: {:?}", config);

    preflight::check_assets(&config).context("Startup checks failed")?;

    let state = AppState::new(
        config.clone(),
        WorkflowManager::default(),
        Arc::new(RandomMetrics::from_entropy()),
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    preflight::announce(&config);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("VabHub stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
