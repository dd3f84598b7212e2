use reqwest::StatusCode;
use summarizer_core::{ErrorKind, HttpError};
use thiserror::Error;

/// Errors that can occur while producing a summary
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// No API key was configured
    #[error("Gemma API key not found in environment variables")]
    MissingApiKey,

    /// The provider could not be reached, or its body could not be read
    #[error("failed to reach provider: {0}")]
    Transport(#[source] reqwest::Error),

    /// The outbound request could not be serialized
    #[error("failed to encode provider request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The provider body was not the expected JSON shape
    #[error("failed to decode provider response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    /// The provider answered without any candidate text
    #[error("No summary generated")]
    EmptyResult,
}

impl SummarizeError {
    /// Transport failure with the request URL stripped
    ///
    /// The URL carries the API key as a query parameter and must not end up
    /// in messages returned to callers or written to logs.
    pub fn transport(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }
}

impl HttpError for SummarizeError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Encode(_) | Self::Decode(_) => ErrorKind::MalformedData,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::EmptyResult => ErrorKind::EmptyResult,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MissingApiKey | Self::EmptyResult => self.to_string(),
            other => format!("Failed to generate summary: {other}"),
        }
    }
}
