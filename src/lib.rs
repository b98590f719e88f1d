//! # MLS Listing Search
//!
//! A REST API serving MLS (CREA DDF) listing data from an immutable,
//! in-memory store.
//!
//! ## Features
//!
//! - **Search**: price range, city substring, bed/bath minimums, property
//!   subtype and status filters, price sorting and pagination
//! - **Lenient Queries**: malformed parameters fall back to defaults instead
//!   of failing the request
//! - **Lookups and Aggregates**: single listing by key, distinct cities,
//!   store-wide statistics
//! - **Lock-free Reads**: the store is loaded once and shared read-only
//!   across every request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mls::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServerConfig::load()?;
//!     let service = InMemoryListingService::from_fixture(&config.fixture_path).await?;
//!
//!     ServerBuilder::new()
//!         .with_listing_service(service)
//!         .with_config(&config)
//!         .serve(&config.bind_address())
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResponse, DataError, GeoPoint, Listing, ListingError, ListingPage,
        ListingQuery, ListingService, ListingStatistics, PaginationMeta, QueryParams,
        RequestError, SortOrder,
        engine::{cities, find_by_key, search, statistics},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryListingService, load_listings, parse_listings};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
