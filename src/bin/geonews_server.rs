//! `geonews-server` — serves the news search API.
//!
//! Configuration comes from `$GEONEWS_CONFIG` or
//! `~/.config/geonews/config.toml`; a missing file means defaults.

use geonews::config::AppConfig;
use geonews::server::{AppState, NewsServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = AppConfig::config_path();
    let config = AppConfig::load_or_default(&path)?;
    tracing::info!(path = %path.display(), "geonews-server starting");

    let state = AppState::from_config(&config)?;
    let server = NewsServer::start(state, &config.server).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}
