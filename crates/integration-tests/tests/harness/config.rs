//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use secrecy::SecretString;
use summarizer_config::{Config, CorsConfig, ProviderConfig, ServerConfig, StaticFilesConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with no provider key and no CORS
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the provider at a mock backend, authenticated with `api_key`
    pub fn with_provider(mut self, base_url: &str, api_key: &str) -> Self {
        self.config.provider = ProviderConfig {
            api_key: Some(SecretString::from(api_key)),
            base_url: base_url.parse().expect("valid URL"),
            ..ProviderConfig::default()
        };
        self
    }

    /// Point the provider at a mock backend without any API key
    pub fn with_keyless_provider(mut self, base_url: &str) -> Self {
        self.config.provider.base_url = base_url.parse().expect("valid URL");
        self.config.provider.api_key = None;
        self
    }

    /// Override the prompt template
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.config.provider.prompt = prompt.to_owned();
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Serve the frontend from `dir`
    pub fn with_static_dir(mut self, dir: &Path) -> Self {
        self.config.server.static_files = Some(StaticFilesConfig {
            dir: dir.to_path_buf(),
            ..StaticFilesConfig::default()
        });
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
