//! Application state shared across handlers.

use crate::relay::RelayClient;
use anyhow::Context;
use std::sync::Arc;
use vestibule_core::AppConfig;

/// Shared application state.
///
/// Deliberately small: the configuration and the outbound client. Each
/// request's staged upload is local to its own handler invocation, so
/// nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Client for the downstream analysis service.
    pub relay: RelayClient,
}

impl AppState {
    /// Create a new application state. Validates the configuration and
    /// builds the downstream client; fails fast on either.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid configuration")?;
        let relay =
            RelayClient::new(&config.relay).context("failed to build downstream client")?;
        Ok(Self {
            config: Arc::new(config),
            relay,
        })
    }
}
