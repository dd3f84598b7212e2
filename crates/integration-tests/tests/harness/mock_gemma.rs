//! Mock Gemma backend for integration tests
//!
//! Serves `POST /v1beta/models/{model}:generateContent` with a canned
//! response and records what each request carried.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// What the mock saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// `{model}:generateContent` path segment
    pub target: String,
    /// `key` query parameter
    pub api_key: Option<String>,
    /// `Content-Type` header
    pub content_type: Option<String>,
    /// Text of the first part of the first content
    pub prompt: Option<String>,
}

/// Mock Gemma backend that returns one fixed response
pub struct MockGemma {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGemmaState>,
}

struct MockGemmaState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockGemma {
    /// Answer every request with one candidate whose single part is `summary`
    pub async fn start_with_summary(summary: &str) -> anyhow::Result<Self> {
        let body = serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": summary}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5, "totalTokenCount": 15}
        });
        Self::start_with_json(StatusCode::OK, &body).await
    }

    /// Answer every request with `status` and a JSON body
    pub async fn start_with_json(status: StatusCode, body: &serde_json::Value) -> anyhow::Result<Self> {
        Self::start_raw(status, body.to_string()).await
    }

    /// Answer every request with `status` and an arbitrary body
    pub async fn start_raw(status: StatusCode, body: String) -> anyhow::Result<Self> {
        let state = Arc::new(MockGemmaState {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1beta/models/{target}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("lock poisoned").clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("lock poisoned").len()
    }
}

impl Drop for MockGemma {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

async fn handle_generate(
    State(state): State<Arc<MockGemmaState>>,
    Path(target): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let prompt = serde_json::from_slice::<GenerateRequest>(&body)
        .ok()
        .and_then(|req| req.contents.into_iter().next())
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text);

    state.requests.lock().expect("lock poisoned").push(RecordedRequest {
        target,
        api_key: query.get("key").cloned(),
        content_type: headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        prompt,
    });

    (
        state.status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}
