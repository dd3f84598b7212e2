#![allow(clippy::must_use_candidate)]

mod cors;
mod health;
mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use summarizer_config::Config;
use summarizer_gemma::SummarizationClient;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the summarization client cannot be constructed
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address;

        if !config.has_api_key() {
            tracing::warn!("no provider API key configured; summarize requests will fail until GEMMA_API_KEY is set");
        }

        let client = SummarizationClient::new(&config.provider)?;
        tracing::debug!(model = %client.model(), "summarization client ready");

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Summarize route
        app = app.merge(summarizer_gemma::summarize_router(Arc::new(client)));

        // Browser frontend
        if let Some(ref static_config) = config.server.static_files {
            app = app.merge(static_files::static_router(static_config));
        }

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
