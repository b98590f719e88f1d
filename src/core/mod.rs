//! Core module containing the listing model, query engine and error types

pub mod engine;
pub mod error;
pub mod filters;
pub mod listing;
pub mod query;
pub mod response;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::ListingStatistics;
pub use error::{ApiError, DataError, ListingError, RequestError};
pub use listing::{DEFAULT_STATUS, GeoPoint, Listing};
pub use query::{ListingPage, ListingQuery, PaginationMeta, QueryParams, SortOrder};
pub use response::ApiResponse;
pub use service::ListingService;
