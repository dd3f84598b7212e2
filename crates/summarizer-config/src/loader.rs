use std::net::SocketAddr;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::{API_KEY_ENV, Config, CorsConfig, DEFAULT_PORT, ServerConfig};

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result. A file without
    /// `provider.api_key` falls back to `GEMMA_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let mut config = Self::parse(&raw)?;
        if config.provider.api_key.is_none() {
            config.provider.api_key = api_key_from_env();
        }

        Ok(config)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Build configuration from `GEMMA_API_KEY` and `PORT`
    ///
    /// Everything else takes its default, with CORS open to the browser
    /// frontend.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid {PORT_ENV} value '{raw}': {e}"))?,
            _ => DEFAULT_PORT,
        };

        let mut config = Self {
            server: ServerConfig {
                listen_address: SocketAddr::from(([0, 0, 0, 0], port)),
                cors: Some(CorsConfig::frontend()),
                ..ServerConfig::default()
            },
            ..Self::default()
        };
        config.provider.api_key = api_key_from_env();

        config.validate()?;

        Ok(config)
    }

    /// Whether a non-empty provider API key is configured
    pub fn has_api_key(&self) -> bool {
        self.provider
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Validate that the configuration is internally consistent
    ///
    /// A missing API key is not an error here: the server still starts and
    /// every summarization call reports the configuration problem.
    ///
    /// # Errors
    ///
    /// Returns an error if a path, model, or timeout setting is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server_config()?;
        self.validate_provider_config()?;
        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if let Some(ref static_files) = self.server.static_files {
            if !static_files.mount.starts_with('/') || static_files.mount == "/" {
                anyhow::bail!("server.static_files.mount must start with '/' and must not be the root path");
            }
            if static_files.index.is_empty() {
                anyhow::bail!("server.static_files.index must not be empty");
            }
            for route in static_files.pages.keys() {
                let health_path = self.server.health.enabled.then_some(self.server.health.path.as_str());
                validate_page_route(route, &static_files.mount, health_path)?;
            }
        }

        Ok(())
    }

    fn validate_provider_config(&self) -> anyhow::Result<()> {
        if self.provider.model.trim().is_empty() {
            anyhow::bail!("provider.model must not be empty");
        }

        self.provider.timeout_duration()?;

        Ok(())
    }
}

fn validate_page_route(route: &str, mount: &str, health_path: Option<&str>) -> anyhow::Result<()> {
    if !route.starts_with('/') || route == "/" {
        anyhow::bail!("server.static_files.pages route '{route}' must start with '/' and must not be the root path");
    }
    if route.contains(['{', '}', '*', ':']) {
        anyhow::bail!("server.static_files.pages route '{route}' must be a literal path");
    }
    let under_mount = route
        .strip_prefix(mount)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
    if health_path == Some(route) || route == "/summarize" || under_mount {
        anyhow::bail!("server.static_files.pages route '{route}' conflicts with another route");
    }
    Ok(())
}

fn api_key_from_env() -> Option<SecretString> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
}
