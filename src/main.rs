mod analysis;
mod compose;
mod config;
mod error;
mod reply;
mod storage;
mod web;

use std::sync::Arc;
use anyhow::{Context, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replier=info,tower_http=info".into()),
        )
        .init();

    info!("Loading configuration...");
    let config = config::AppConfig::load()?;
    info!(
        "Supported platforms: {}",
        config.composer.supported_platforms.join(", ")
    );

    let store = storage::open_store(&config.storage)
        .await
        .context("Failed to open reply store")?;
    info!("Reply store ready (backend: {})", store.backend());

    let service = Arc::new(reply::ReplyService::new(&config, store));
    let app_state = web::state::AppState::new(service);

    let router = web::create_router(app_state);
    let addr = format!("{}:{}", config.web.host, config.web.port);
    info!("Starting web server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:#}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
