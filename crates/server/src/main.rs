//! Vestibule server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vestibule_core::AppConfig;
use vestibule_server::{AppState, create_router};

/// Vestibule - an upload relay frontend
#[derive(Parser, Debug)]
#[command(name = "vestibuled")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "VESTIBULE_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Vestibule v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args.config)?;

    // The staging directory must exist before the first upload arrives.
    tokio::fs::create_dir_all(&config.staging.temp_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create staging directory {}",
                config.staging.temp_dir.display()
            )
        })?;
    tracing::info!(
        temp_dir = %config.staging.temp_dir.display(),
        downstream_url = %config.relay.downstream_url,
        "Staging directory ready"
    );

    let state = AppState::new(config)?;
    let app = create_router(state.clone());

    let addr: SocketAddr = state
        .config
        .server
        .bind
        .parse()
        .context("invalid bind address")?;

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration from an optional TOML file merged with
/// VESTIBULE_-prefixed environment variables. Every field has a default,
/// so a missing file just means the reference configuration.
fn load_config(path: &str) -> Result<AppConfig> {
    let mut figment = Figment::new();

    if std::path::Path::new(path).exists() {
        tracing::info!(config_path = %path, "Loading configuration from file");
        figment = figment.merge(Toml::file(path));
    } else {
        tracing::debug!("No config file found at {}, using defaults", path);
    }

    figment
        .merge(Env::prefixed("VESTIBULE_").split("__"))
        .extract()
        .context("failed to load configuration")
}
