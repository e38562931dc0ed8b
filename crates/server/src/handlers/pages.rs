//! Upload form and health endpoints.

use crate::state::AppState;
use crate::views;
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde::Serialize;

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::index_page(&state.config.relay.field_name))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
///
/// Reports only this process's liveness; the downstream is probed by
/// nothing but real uploads.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
