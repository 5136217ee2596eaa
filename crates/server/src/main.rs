//! Movie resolver HTTP server.
//!
//! Serves `/api/movie` and the static frontend on the configured port.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use server::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    let resolver = config
        .providers
        .build_resolver()
        .context("Failed to build movie resolver")?;
    let app = build_router(AppState { resolver }, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Movie resolver listening on {} (static files from {}, region {})",
        addr,
        config.static_dir.display(),
        config.providers.watch_region
    );
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
