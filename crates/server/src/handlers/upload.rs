//! Upload relay handler.
//!
//! The request lifecycle is linear: Received -> Staged -> Forwarded ->
//! Responded -> Cleaned. Any failure after staging short-circuits straight
//! to cleanup before the response goes out; the staged file never outlives
//! the handler invocation that created it.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::views;
use axum::extract::{Multipart, State};
use axum::response::Html;
use vestibule_core::StagedUpload;

/// POST /upload
///
/// Accepts a multipart body with one file part under the configured field
/// name, stages it, forwards it downstream, and renders the downstream JSON.
/// A missing file part is rejected up front with 400 before anything touches
/// disk or the network.
pub async fn relay_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Html<String>> {
    let field_name = state.config.relay.field_name.as_str();

    let mut staged: Option<StagedUpload> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }

        let original_filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;

        tracing::info!(
            filename = %original_filename,
            size = bytes.len(),
            "File received"
        );

        staged = Some(
            StagedUpload::stage(&state.config.staging.temp_dir, &original_filename, &bytes)
                .await?,
        );
        break;
    }

    let staged = staged
        .ok_or_else(|| ApiError::BadRequest(format!("missing file part `{field_name}`")))?;

    // No `?` between here and remove(): the forward result is held so the
    // staged file is cleaned on the failure path too. The Drop impl still
    // backstops panics.
    let result = state.relay.forward(&staged).await;
    staged.remove().await;

    match result {
        Ok(json) => {
            tracing::info!("Relay succeeded");
            Ok(Html(views::result_page(&json)))
        }
        Err(e) => {
            tracing::error!(error = %e, source = ?std::error::Error::source(&e), "Relay failed");
            Err(e.into())
        }
    }
}
