//! HTTP frontend for the vestibule upload relay.
//!
//! This crate provides the browser-facing surface:
//! - Upload form and result views
//! - The upload relay handler (stage, forward, render, clean)
//! - The downstream relay client
//! - Health check

pub mod error;
pub mod handlers;
pub mod relay;
pub mod routes;
pub mod state;
pub mod views;

pub use error::ApiError;
pub use relay::{RelayClient, RelayError};
pub use routes::create_router;
pub use state::AppState;
