//! Axum route for `POST /summarize`

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use summarizer_core::HttpError;

use crate::summarizer::Summarizer;
use crate::types::{RawSummaryRequest, SummaryRequest, SummaryResponse};
use crate::validate::RequestError;

/// Build the summarization router
pub fn summarize_router(summarizer: Arc<dyn Summarizer>) -> Router {
    Router::new()
        .route("/summarize", routing::post(summarize))
        .with_state(summarizer)
}

/// Handle `POST /summarize`
///
/// The body is decoded as JSON whatever its `Content-Type`, so plain
/// `curl -d` clients are accepted too.
async fn summarize(State(summarizer): State<Arc<dyn Summarizer>>, body: Bytes) -> Response {
    let request = match serde_json::from_slice::<RawSummaryRequest>(&body)
        .map_err(RequestError::from)
        .and_then(SummaryRequest::try_from)
    {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "rejected summarize request");
            return error_response(&e);
        }
    };

    match summarizer.summarize(&request).await {
        Ok(summary) => Json(SummaryResponse { summary }).into_response(),
        Err(e) => {
            tracing::warn!(kind = %e.kind(), error = %e, "summarization failed");
            error_response(&e)
        }
    }
}

/// Convert a domain error to a `{"error": "..."}` JSON response
fn error_response<E: HttpError>(error: &E) -> Response {
    (error.status_code(), Json(error.to_body())).into_response()
}
