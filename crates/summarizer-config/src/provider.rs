use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default Google Generative Language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model; 128K context window
pub const DEFAULT_MODEL: &str = "gemma-3-27b-it";

/// Instruction placed in front of the caller's text
pub const DEFAULT_PROMPT: &str = "Summarize the following text concisely. Even if the text is short, try to provide a \
concise summary. Highlight the main points and details, and provide an organized summary. Don't start off with \
Summary: or In summary: or starters like that, just give the organized concise clear summary.\n\n";

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "GEMMA_API_KEY";

/// Configuration for the Gemma summarization provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key, sent as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model name used in the `generateContent` path
    #[serde(default = "default_model")]
    pub model: String,
    /// Prompt template prefixed to every text
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Request timeout (e.g. "30s"); transport defaults apply when absent
    #[serde(default)]
    pub timeout: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            prompt: default_prompt(),
            timeout: None,
        }
    }
}

impl ProviderConfig {
    /// Parse the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout string is not a valid duration
    pub fn timeout_duration(&self) -> anyhow::Result<Option<Duration>> {
        self.timeout
            .as_deref()
            .map(|s| duration_str::parse(s).map_err(|e| anyhow::anyhow!("invalid provider timeout '{s}': {e}")))
            .transpose()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default URL")
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}
