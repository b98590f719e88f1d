//! Router builder utilities for listing routes

use crate::server::handlers::{
    AppState, get_listing, get_statistics, health_check, list_cities, list_listings,
};
use axum::{Router, routing::get};

/// Build the listing API routes
///
/// - GET /api/health - Liveness and data mode
/// - GET /api/listings - Filtered, sorted, paginated search
/// - GET /api/listings/{listing_key} - A single listing
/// - GET /api/cities - Distinct cities
/// - GET /api/statistics - Aggregate figures
pub fn build_listing_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/listings", get(list_listings))
        .route("/api/listings/{listing_key}", get(get_listing))
        .route("/api/cities", get(list_cities))
        .route("/api/statistics", get(get_statistics))
        .with_state(state)
}
