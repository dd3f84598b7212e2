//! Gemma `generateContent` client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use summarizer_config::ProviderConfig;
use url::Url;

use crate::error::SummarizeError;
use crate::protocol::{GemmaErrorResponse, GemmaRequest, GemmaResponse};
use crate::summarizer::Summarizer;
use crate::types::SummaryRequest;

/// Characters of an undecodable provider error body kept in the message
const MAX_ERROR_EXCERPT: usize = 200;

/// Client for the Gemma summarization provider
///
/// Holds an immutable copy of the provider configuration and a pooled
/// HTTP client; cheap to share behind an `Arc`.
pub struct SummarizationClient {
    client: Client,
    base_url: Url,
    model: String,
    prompt: String,
    api_key: Option<SecretString>,
}

impl SummarizationClient {
    /// Create from provider configuration
    ///
    /// A missing API key is accepted here and reported on every
    /// [`Summarizer::summarize`] call instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is invalid or the HTTP client cannot
    /// be built
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_duration()? {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build provider HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            prompt: config.prompt.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Prompt sent upstream: the template followed by the text, verbatim
    pub fn build_prompt(&self, text: &str) -> String {
        format!("{}{text}", self.prompt)
    }

    /// Model this client targets
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the `generateContent` endpoint URL, without the key
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.model)
    }

    fn api_key(&self) -> Result<&str, SummarizeError> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.is_empty())
            .ok_or(SummarizeError::MissingApiKey)
    }
}

#[async_trait]
impl Summarizer for SummarizationClient {
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        let api_key = self.api_key()?;

        let wire_request = GemmaRequest::from_prompt(self.build_prompt(request.text()));
        let body = serde_json::to_vec(&wire_request).map_err(SummarizeError::Encode)?;

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", api_key)])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let error = SummarizeError::transport(e);
                tracing::error!(model = %self.model, error = %error, "upstream request failed");
                error
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            let error = SummarizeError::transport(e);
            tracing::error!(model = %self.model, error = %error, "failed to read upstream body");
            error
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<GemmaErrorResponse>(&bytes).map_or_else(
                |_| body_excerpt(&bytes),
                |body| body.error.message,
            );
            tracing::warn!(model = %self.model, status = %status, "upstream returned error");
            return Err(SummarizeError::Upstream { status, message });
        }

        let wire_response: GemmaResponse = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(model = %self.model, error = %e, "failed to parse upstream response");
            SummarizeError::Decode(e)
        })?;

        wire_response.into_first_text().ok_or_else(|| {
            tracing::warn!(model = %self.model, "upstream returned no candidate text");
            SummarizeError::EmptyResult
        })
    }
}

/// Leading part of an undecodable error body, fit for a client message
fn body_excerpt(bytes: &[u8]) -> String {
    let body = String::from_utf8_lossy(bytes);
    let body = body.trim();
    if body.chars().count() <= MAX_ERROR_EXCERPT {
        return body.to_owned();
    }
    let mut excerpt: String = body.chars().take(MAX_ERROR_EXCERPT).collect();
    excerpt.push_str("...");
    excerpt
}
