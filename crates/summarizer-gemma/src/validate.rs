//! Request validation for `POST /summarize`

use summarizer_core::{ErrorKind, HttpError};
use thiserror::Error;

use crate::types::{RawSummaryRequest, SummaryRequest};

const INVALID_FORMAT: &str = "Invalid request format. Please provide 'text' field.";

/// Reasons an inbound payload is rejected
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body was not JSON, not an object, or had a mistyped `text`
    #[error("malformed request body: {detail}")]
    Malformed { detail: String },

    /// `text` absent or `null`
    #[error("missing 'text' field")]
    MissingText,

    /// `text` is the empty string
    #[error("Text cannot be empty")]
    EmptyText,
}

impl From<serde_json::Error> for RequestError {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed {
            detail: error.to_string(),
        }
    }
}

impl HttpError for RequestError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidRequest
    }

    fn client_message(&self) -> String {
        match self {
            Self::Malformed { .. } | Self::MissingText => INVALID_FORMAT.to_owned(),
            Self::EmptyText => self.to_string(),
        }
    }
}

impl TryFrom<RawSummaryRequest> for SummaryRequest {
    type Error = RequestError;

    /// Presence and non-emptiness only; the text is not trimmed or capped
    fn try_from(raw: RawSummaryRequest) -> Result<Self, Self::Error> {
        match raw.text {
            None => Err(RequestError::MissingText),
            Some(text) if text.is_empty() => Err(RequestError::EmptyText),
            Some(text) => Ok(Self::new_unchecked(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: serde_json::Value) -> RawSummaryRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_text_verbatim() {
        let request = SummaryRequest::try_from(raw(serde_json::json!({"text": "  The sky is blue.\n"}))).unwrap();
        assert_eq!(request.text(), "  The sky is blue.\n");
    }

    #[test]
    fn whitespace_only_text_is_not_empty() {
        assert!(SummaryRequest::try_from(raw(serde_json::json!({"text": "   "}))).is_ok());
    }

    #[test]
    fn missing_and_null_text_are_rejected() {
        for body in [serde_json::json!({}), serde_json::json!({"text": null}), serde_json::json!({"txt": "x"})] {
            let err = SummaryRequest::try_from(raw(body)).unwrap_err();
            assert!(matches!(err, RequestError::MissingText));
            assert_eq!(err.client_message(), INVALID_FORMAT);
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = SummaryRequest::try_from(raw(serde_json::json!({"text": ""}))).unwrap_err();
        assert!(matches!(err, RequestError::EmptyText));
        assert_eq!(err.client_message(), "Text cannot be empty");
        assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn mistyped_text_fails_decoding() {
        let err = serde_json::from_slice::<RawSummaryRequest>(br#"{"text": 42}"#).unwrap_err();
        let err = RequestError::from(err);
        assert!(matches!(err, RequestError::Malformed { .. }));
        assert_eq!(err.client_message(), INVALID_FORMAT);
    }
}
