use serde::{Deserialize, Serialize};

/// Inbound body as decoded, before validation
///
/// Unknown fields are ignored. `text` is optional here so that a missing
/// field is reported by the validator rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSummaryRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// A validated summarization request; `text` is never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    text: String,
}

impl SummaryRequest {
    pub(crate) const fn new_unchecked(text: String) -> Self {
        Self { text }
    }

    /// Caller text, exactly as received
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Outbound body: `{"summary": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
