//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::handlers::AppState;
use crate::config::ServerConfig;
use crate::core::ListingService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the listing API server
///
/// # Example
///
/// ```ignore
/// let service = InMemoryListingService::from_fixture("data/mock_listings.json").await?;
///
/// ServerBuilder::new()
///     .with_listing_service(service)
///     .with_mode("mock")
///     .serve("127.0.0.1:3001")
///     .await?;
/// ```
pub struct ServerBuilder {
    listing_service: Option<Arc<dyn ListingService>>,
    mode: String,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            listing_service: None,
            mode: ServerConfig::default().mode,
            custom_routes: Vec::new(),
        }
    }

    /// Set the listing service (required)
    pub fn with_listing_service(mut self, service: impl ListingService + 'static) -> Self {
        self.listing_service = Some(Arc::new(service));
        self
    }

    /// Set the data mode reported by the health endpoint
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Apply the server-level settings of a configuration
    pub fn with_config(self, config: &ServerConfig) -> Self {
        self.with_mode(config.mode.clone())
    }

    /// Add custom routes to the server
    ///
    /// They are merged next to the listing routes and share the JSON 404
    /// fallback and the middleware stack.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let listing_service = self.listing_service.take().ok_or_else(|| {
            anyhow::anyhow!("ListingService is required. Call .with_listing_service()")
        })?;

        let state = AppState {
            listing_service,
            mode: Arc::from(self.mode.as_str()),
        };

        RestExposure::build_router(state, self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}


/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
