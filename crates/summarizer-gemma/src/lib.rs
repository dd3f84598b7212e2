//! Text summarization through the Gemma `generateContent` API
//!
//! Validates inbound `{"text": ...}` payloads, forwards them to the provider
//! behind a fixed prompt, and exposes the `POST /summarize` route.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod client;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod summarizer;
pub mod types;
pub mod validate;

pub use client::SummarizationClient;
pub use error::SummarizeError;
pub use handler::summarize_router;
pub use summarizer::Summarizer;
pub use types::{RawSummaryRequest, SummaryRequest, SummaryResponse};
pub use validate::RequestError;
