//! In-memory implementation of ListingService

use crate::core::engine::{self, ListingStatistics};
use crate::core::{Listing, ListingPage, ListingQuery, ListingService};
use crate::storage::fixture;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// In-memory listing service
///
/// Holds the whole collection behind an `Arc<[Listing]>`. The slice is never
/// written after construction, so clones share it and reads need no lock.
#[derive(Debug, Clone)]
pub struct InMemoryListingService {
    listings: Arc<[Listing]>,
    latency: Duration,
}

impl InMemoryListingService {
    /// Create a service over an already loaded collection
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
            latency: Duration::ZERO,
        }
    }

    /// Load the collection from a fixture file
    pub async fn from_fixture(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let listings = fixture::load_listings(path)
            .await
            .with_context(|| format!("listing data unavailable from {}", path.display()))?;
        Ok(Self::new(listings))
    }

    /// Delay searches and lookups by a fixed amount
    ///
    /// Only simulates a remote MLS feed. Results are unaffected.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of listings held
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ListingService for InMemoryListingService {
    async fn search(&self, query: &ListingQuery) -> Result<ListingPage> {
        self.simulate_latency().await;
        Ok(engine::search(&self.listings, query))
    }

    async fn get(&self, listing_key: &str) -> Result<Option<Listing>> {
        self.simulate_latency().await;
        Ok(engine::find_by_key(&self.listings, listing_key).cloned())
    }

    async fn cities(&self) -> Result<Vec<String>> {
        Ok(engine::cities(&self.listings))
    }

    async fn statistics(&self) -> Result<ListingStatistics> {
        Ok(engine::statistics(&self.listings))
    }
}
