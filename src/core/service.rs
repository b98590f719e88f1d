//! Service trait for listing read operations

use crate::core::engine::ListingStatistics;
use crate::core::listing::Listing;
use crate::core::query::{ListingPage, ListingQuery};
use anyhow::Result;
use async_trait::async_trait;

/// Read-only access to a listing collection
///
/// Handlers only ever see this trait. Implementations decide where the
/// listings live. There is no write side: the collection never changes once
/// the service is built.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Filter, sort and paginate listings
    async fn search(&self, query: &ListingQuery) -> Result<ListingPage>;

    /// Get a listing by its key
    async fn get(&self, listing_key: &str) -> Result<Option<Listing>>;

    /// Distinct cities, alphabetically sorted
    async fn cities(&self) -> Result<Vec<String>>;

    /// Aggregate figures over every listing
    async fn statistics(&self) -> Result<ListingStatistics>;
}
