#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod static_files;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use provider::*;
pub use server::*;
pub use static_files::*;
pub use telemetry::*;

/// Top-level summarizer configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Summarization provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
