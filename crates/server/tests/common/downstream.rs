//! Stub downstream service for relay tests.
//!
//! Each stub is a real axum listener on an ephemeral port so the relay
//! client exercises its actual reqwest path, not a mock.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A spawned stub downstream service. Aborted on drop.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct StubDownstream {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl StubDownstream {
    async fn spawn(router: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub downstream");
        let addr = listener.local_addr().expect("Failed to read stub address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub downstream exited");
        });
        Self { addr, handle }
    }

    /// The /upload URL of this stub.
    pub fn upload_url(&self) -> String {
        format!("http://{}/upload", self.addr)
    }

    /// Stub that answers every upload with a fixed JSON body and status.
    pub async fn json_with_status(status: StatusCode, reply: Value) -> Self {
        let router = Router::new().route(
            "/upload",
            post(move || {
                let reply = reply.clone();
                async move { (status, Json(reply)) }
            }),
        );
        Self::spawn(router).await
    }

    /// Stub that answers every upload with a fixed 200 JSON body.
    pub async fn json(reply: Value) -> Self {
        Self::json_with_status(StatusCode::OK, reply).await
    }

    /// Stub that sleeps before answering, for outbound-timeout tests.
    pub async fn delayed_json(delay: Duration, reply: Value) -> Self {
        let router = Router::new().route(
            "/upload",
            post(move || {
                let reply = reply.clone();
                async move {
                    tokio::time::sleep(delay).await;
                    Json(reply)
                }
            }),
        );
        Self::spawn(router).await
    }

    /// Stub that answers with a non-JSON body and the given status.
    pub async fn text(status: StatusCode, body: &'static str) -> Self {
        let router = Router::new().route("/upload", post(move || async move { (status, body) }));
        Self::spawn(router).await
    }

    /// Stub that echoes the received multipart part back as JSON, so tests
    /// can assert the relay forwarded field name, filename, and bytes
    /// unmodified.
    pub async fn echo() -> Self {
        let router = Router::new().route("/upload", post(echo_upload));
        Self::spawn(router).await
    }

    /// A URL nothing is listening on (bound, then released).
    pub async fn unreachable_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind throwaway listener");
        let addr = listener.local_addr().expect("Failed to read throwaway address");
        drop(listener);
        format!("http://{addr}/upload")
    }
}

impl Drop for StubDownstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn echo_upload(mut multipart: Multipart) -> Json<Value> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("bad multipart") {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.expect("failed to read part");
        parts.push(json!({
            "field": name,
            "filename": filename,
            "size": bytes.len(),
            "content": String::from_utf8_lossy(&bytes),
        }));
    }
    Json(json!({ "parts": parts }))
}
