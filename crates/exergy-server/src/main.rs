//! Exergy Site Server
//!
//! Axum-based static host for the Leptos frontend. The contact form talks to
//! the email relay straight from the browser, so there is no API here.

mod config;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exergy_core::Route;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new(config.site_dir.clone());

    if state.index_available() {
        tracing::info!("✓ Serving site from {}", config.site_dir.display());
    } else {
        tracing::warn!("⚠ {} not found", state.index_path().display());
        tracing::warn!("  Build the frontend first: trunk build --release crates/exergy-web/index.html");
    }

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("🚀 Exergy site running on http://{}", config.bind_addr);
    tracing::info!("Routes:");
    for route in Route::ALL {
        tracing::info!("  GET  {:<12} - {}", route.path(), route.title());
    }
    tracing::info!("  GET  {:<12} - Health check", "/health");

    axum::serve(listener, app).await?;

    Ok(())
}
