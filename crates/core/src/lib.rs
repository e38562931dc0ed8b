//! Core domain types for the vestibule upload relay.
//!
//! This crate defines what the server crate builds on:
//! - Application configuration
//! - The staged upload entity and its cleanup guarantee
//! - The core error type

pub mod config;
pub mod error;
pub mod staging;

pub use config::{AppConfig, RelayConfig, ServerConfig, StagingConfig};
pub use error::{Error, Result};
pub use staging::StagedUpload;
