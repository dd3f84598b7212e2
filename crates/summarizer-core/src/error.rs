use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Category of a failure surfaced to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or empty text, or an undecodable body
    InvalidRequest,
    /// Required configuration (the provider API key) is absent
    Configuration,
    /// The provider could not be reached or the body could not be read
    Transport,
    /// JSON encoding or decoding failed on either side
    MalformedData,
    /// The provider answered with a non-success status
    Upstream,
    /// The provider answered without any candidate text
    EmptyResult,
}

impl ErrorKind {
    /// Machine-readable name used in log fields
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request_error",
            Self::Configuration => "configuration_error",
            Self::Transport => "transport_error",
            Self::MalformedData => "malformed_data_error",
            Self::Upstream => "upstream_error",
            Self::EmptyResult => "empty_result_error",
        }
    }

    /// HTTP status for this kind
    ///
    /// Only caller mistakes are 4xx; every provider-side failure is a 500.
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Transport | Self::MalformedData | Self::Upstream | Self::EmptyResult => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by the validator and client error types. The handler layer
/// converts these into actual HTTP responses, keeping domain errors
/// decoupled from axum.
pub trait HttpError: std::error::Error {
    /// Category of this error
    fn kind(&self) -> ErrorKind;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// JSON body for this error
    fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.client_message(),
        }
    }
}

/// JSON error payload: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Broken;

    impl std::fmt::Display for Broken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("broken")
        }
    }

    impl std::error::Error for Broken {}

    impl HttpError for Broken {
        fn kind(&self) -> ErrorKind {
            ErrorKind::EmptyResult
        }

        fn client_message(&self) -> String {
            "No summary generated".to_owned()
        }
    }

    #[test]
    fn only_invalid_request_is_a_client_error() {
        assert_eq!(ErrorKind::InvalidRequest.status_code(), StatusCode::BAD_REQUEST);

        for kind in [
            ErrorKind::Configuration,
            ErrorKind::Transport,
            ErrorKind::MalformedData,
            ErrorKind::Upstream,
            ErrorKind::EmptyResult,
        ] {
            assert_eq!(kind.status_code(), StatusCode::INTERNAL_SERVER_ERROR, "{kind}");
        }
    }

    #[test]
    fn body_serializes_as_single_error_field() {
        let body = Broken.to_body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "No summary generated"}));
        assert_eq!(Broken.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
