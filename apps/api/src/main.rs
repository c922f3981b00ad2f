mod config;
mod errors;
mod extract;
mod jobs;
mod models;
mod preferences;
mod profile;
mod provider;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::preferences::theme::PreferenceStore;
use crate::provider::MockDataProvider;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobboard API v{}", env!("CARGO_PKG_VERSION"));

    // One-time read of the stored theme; falls back to DEFAULT_THEME
    let preferences = PreferenceStore::new(config.preferences_path.clone());
    let theme = preferences.load_or(config.default_theme).await;
    info!(
        "Active theme: {theme} (preferences at {})",
        preferences.path().display()
    );

    // Mock data provider (static catalog + in-memory profile)
    let provider = Arc::new(MockDataProvider::default());

    let state = AppState::new(config.clone(), provider, theme);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
