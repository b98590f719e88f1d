//! HTTP handlers for the listing API

use crate::core::{
    ApiError, ApiResponse, Listing, ListingError, ListingPage, ListingQuery, ListingService,
    ListingStatistics, QueryParams, RequestError,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::{Method, Uri},
};
use serde::Serialize;
use std::sync::Arc;

/// Shared state for all listing handlers
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<dyn ListingService>,

    /// Reported by the health endpoint ("mock" or "live")
    pub mode: Arc<str>,
}

/// Body of the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub mode: String,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus {
        status: "ok",
        message: "CREA DDF API is running",
        mode: state.mode.to_string(),
    }))
}

/// GET /api/listings
///
/// Query values are taken as plain strings; anything that does not parse is
/// ignored rather than rejected.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<ListingPage> {
    let query = ListingQuery::from(QueryParams::from_pairs(pairs));
    tracing::debug!(?query, "Searching listings");

    let page = state
        .listing_service
        .search(&query)
        .await
        .map_err(|e| ApiError::internal("fetch listings", e))?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/listings/{listing_key}
///
/// A key that cannot be decoded gets the JSON envelope like any other error.
pub async fn get_listing(
    State(state): State<AppState>,
    listing_key: Result<Path<String>, PathRejection>,
) -> ApiResult<Listing> {
    let Path(listing_key) = listing_key.map_err(|rejection| RequestError::InvalidPath {
        message: rejection.body_text(),
    })?;

    let found = state
        .listing_service
        .get(&listing_key)
        .await
        .map_err(|e| ApiError::internal("fetch listing details", e))?;
    let listing = found.ok_or(ListingError::NotFound { listing_key })?;

    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /api/cities
pub async fn list_cities(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let cities = state
        .listing_service
        .cities()
        .await
        .map_err(|e| ApiError::internal("fetch cities", e))?;

    Ok(Json(ApiResponse::ok(cities)))
}

/// GET /api/statistics
pub async fn get_statistics(State(state): State<AppState>) -> ApiResult<ListingStatistics> {
    let stats = state
        .listing_service
        .statistics()
        .await
        .map_err(|e| ApiError::internal("fetch statistics", e))?;

    Ok(Json(ApiResponse::ok(stats)))
}

/// Fallback for every unmatched method/path
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    RequestError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}
