//! Server test utilities.

use std::path::PathBuf;
use tempfile::TempDir;
use vestibule_core::AppConfig;
use vestibule_server::{AppState, create_router};

/// A test server wrapper with temporary staging storage.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server relaying to `downstream_url`, staging into a
    /// fresh temp directory.
    pub fn new(downstream_url: &str) -> Self {
        Self::with_config(downstream_url, |_| {})
    }

    /// Create a test server with custom config modifications.
    pub fn with_config<F>(downstream_url: &str, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let staging_dir = temp_dir.path().join("staging");
        std::fs::create_dir_all(&staging_dir).expect("Failed to create staging directory");

        let mut config = AppConfig::for_testing();
        config.relay.downstream_url = downstream_url.to_string();
        // Keep failures quick; unreachable-downstream tests should not wait
        // out the production default.
        config.relay.timeout_secs = 2;
        config.staging.temp_dir = staging_dir;
        modifier(&mut config);

        let state = AppState::new(config).expect("Failed to create app state");
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: temp_dir,
        }
    }

    /// The staging directory this server writes to.
    pub fn staging_dir(&self) -> PathBuf {
        self.state.config.staging.temp_dir.clone()
    }

    /// Entries currently present in the staging directory.
    pub fn staged_entries(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.staging_dir())
            .expect("Failed to read staging directory")
            .map(|e| e.expect("Failed to read staging entry").path())
            .collect()
    }

    /// Assert the staging directory is empty (cleanup invariant).
    pub fn assert_staging_empty(&self) {
        let entries = self.staged_entries();
        assert!(
            entries.is_empty(),
            "staging directory should be empty after the handler completes, found: {entries:?}"
        );
    }
}
