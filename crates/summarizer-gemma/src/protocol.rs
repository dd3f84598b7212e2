//! Gemma `generateContent` wire format types
//!
//! Only the fields the summarizer reads or writes are modelled; anything
//! else in a provider response is ignored during deserialization.

use serde::{Deserialize, Serialize};

// -- Request types --

/// `generateContent` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemmaRequest {
    /// Conversation contents; always a single entry here
    pub contents: Vec<GemmaContent>,
}

impl GemmaRequest {
    /// Single-content request carrying one text part
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![GemmaContent {
                role: None,
                parts: vec![GemmaPart { text: Some(prompt) }],
            }],
        }
    }
}

/// Content object containing role and parts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GemmaContent {
    /// Role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GemmaPart>,
}

/// Individual part within a content object
///
/// Non-text parts (inline data, function calls) deserialize with `text`
/// set to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemmaPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// -- Response types --

/// `generateContent` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GemmaResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GemmaCandidate>,
}

impl GemmaResponse {
    /// Consume the response, keeping only the first candidate's first text
    pub fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
    }
}

/// Generated candidate
///
/// A candidate blocked by safety filters arrives without `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemmaCandidate {
    /// Generated content
    #[serde(default)]
    pub content: GemmaContent,
    /// Finish reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

// -- Error response --

/// Error body returned with non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemmaErrorResponse {
    /// Error details
    pub error: GemmaErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemmaErrorDetail {
    /// HTTP status code
    #[serde(default)]
    pub code: u16,
    /// Error message
    pub message: String,
    /// Error status string (e.g. `INVALID_ARGUMENT`)
    #[serde(default)]
    pub status: String,
}
