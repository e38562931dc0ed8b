//! Configuration types shared across crates.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum inbound upload size in bytes.
    ///
    /// Replaces axum's 2 MiB default body limit, which would reject
    /// most real uploads before the handler sees them.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Downstream relay configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Downstream endpoint the staged upload is forwarded to.
    #[serde(default = "default_downstream_url")]
    pub downstream_url: String,
    /// Timeout for the whole outbound request in seconds.
    /// An unbounded outbound call would pin the handler on a hung
    /// downstream, so zero is rejected by validation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Multipart field name carrying the file, inbound and outbound.
    #[serde(default = "default_field_name")]
    pub field_name: String,
}

impl RelayConfig {
    /// Outbound request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Transient staging storage configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Directory uploads are staged in between receipt and forwarding.
    /// Entries are short-lived; the directory is created at startup.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024 // 100 MiB
}

fn default_downstream_url() -> String {
    "http://localhost:5000/upload".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_field_name() -> String {
    "file".to_string()
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("temp_uploads")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            downstream_url: default_downstream_url(),
            timeout_secs: default_timeout_secs(),
            field_name: default_field_name(),
        }
    }
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
        }
    }
}

/// Top-level application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Downstream relay configuration.
    #[serde(default)]
    pub relay: RelayConfig,
    /// Staging storage configuration.
    #[serde(default)]
    pub staging: StagingConfig,
}

impl AppConfig {
    /// Create a test configuration with sensible defaults.
    ///
    /// **For testing only.** Points at the default downstream URL; tests
    /// normally override `relay.downstream_url` and `staging.temp_dir`.
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Validate the configuration, failing fast on values that would only
    /// surface as confusing errors at request time.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind.trim().is_empty() {
            return Err(Error::InvalidConfig("server.bind must not be empty".into()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(Error::InvalidConfig(
                "server.max_upload_bytes must be positive".into(),
            ));
        }
        if self.relay.downstream_url.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "relay.downstream_url must not be empty".into(),
            ));
        }
        if self.relay.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "relay.timeout_secs must be positive (unbounded outbound calls are not supported)"
                    .into(),
            ));
        }
        if self.relay.field_name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "relay.field_name must not be empty".into(),
            ));
        }
        if self.staging.temp_dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "staging.temp_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}
