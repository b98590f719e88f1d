//! Listing API server entry point

use anyhow::{Context, Result};
use mls::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listings_server=info,mls=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load().context("failed to load configuration")?;

    let service = InMemoryListingService::from_fixture(&config.fixture_path)
        .await?
        .with_simulated_latency(config.simulated_latency());

    if config.simulated_latency_ms > 0 {
        tracing::warn!(
            latency_ms = config.simulated_latency_ms,
            "Simulated latency enabled for searches and lookups"
        );
    }

    let addr = config.bind_address();
    tracing::info!(
        listings = service.len(),
        mode = %config.mode,
        "Starting CREA DDF listing API on http://{}",
        addr
    );
    tracing::info!("Health check: http://{}/api/health", addr);
    tracing::info!("Listings: http://{}/api/listings", addr);
    tracing::info!("Statistics: http://{}/api/statistics", addr);
    if config.mode == "mock" {
        tracing::warn!("Serving MOCK data; connect a live CREA DDF feed for production");
    }

    ServerBuilder::new()
        .with_listing_service(service)
        .with_config(&config)
        .serve(&addr)
        .await
}
