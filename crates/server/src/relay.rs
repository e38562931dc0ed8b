//! Downstream relay client.
//!
//! Wraps a single [`reqwest::Client`] built once at startup with the
//! configured outbound timeout. The staged file is streamed into a fresh
//! multipart request; the downstream's JSON body is passed through opaquely.

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use thiserror::Error;
use tokio_util::io::ReaderStream;
use vestibule_core::{RelayConfig, StagedUpload};

/// Errors from forwarding a staged upload downstream.
///
/// Split by kind so the logs can tell "the downstream is down" from "the
/// downstream answered garbage". Display stays generic; callers see no
/// transport detail.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("downstream service unreachable")]
    Unreachable(#[source] reqwest::Error),

    #[error("downstream service returned {status}")]
    Status { status: StatusCode },

    #[error("downstream service returned a non-JSON response")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("failed to read staged upload")]
    Staging(#[source] std::io::Error),
}

/// Client for the configured downstream endpoint.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    downstream_url: String,
    field_name: String,
}

impl RelayClient {
    /// Build the client. The timeout covers the whole outbound request,
    /// connect through body.
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            downstream_url: config.downstream_url.clone(),
            field_name: config.field_name.clone(),
        })
    }

    /// Forward a staged upload to the downstream endpoint and return its
    /// JSON reply.
    ///
    /// The file is streamed from disk, not buffered a second time. The
    /// downstream reports its own validation failures as JSON error bodies;
    /// those parse fine and pass through to the caller unchanged, whatever
    /// the status code. Only a non-JSON body is a relay failure.
    pub async fn forward(&self, upload: &StagedUpload) -> Result<Value, RelayError> {
        let file = tokio::fs::File::open(upload.path())
            .await
            .map_err(RelayError::Staging)?;
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
        let part = Part::stream_with_length(body, upload.len())
            .file_name(upload.original_filename().to_string());
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self
            .http
            .post(&self.downstream_url)
            .multipart(form)
            .send()
            .await
            .map_err(RelayError::Unreachable)?;

        let status = response.status();
        let text = response.text().await.map_err(RelayError::Unreachable)?;

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(json),
            Err(_) if !status.is_success() => Err(RelayError::Status { status }),
            Err(e) => Err(RelayError::InvalidResponse(e)),
        }
    }
}
