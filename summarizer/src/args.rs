use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Gemma summarizer
#[derive(Debug, Parser)]
#[command(name = "summarizer", about = "HTTP proxy that summarizes text with Gemma")]
pub struct Args {
    /// Path to a TOML configuration file; `GEMMA_API_KEY` and `PORT` are
    /// used when omitted
    #[arg(short, long, env = "SUMMARIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "SUMMARIZER_LISTEN")]
    pub listen: Option<SocketAddr>,
}
