//! Typed error handling for the listing API
//!
//! Every failure a client can observe maps to one variant of [`ApiError`],
//! which knows its HTTP status, a stable error code and the JSON envelope it
//! renders as.
//!
//! # Error Categories
//!
//! - [`ListingError`]: lookups that found nothing (an expected outcome)
//! - [`DataError`]: the listing fixture could not be loaded (fatal at startup)
//! - [`RequestError`]: requests that match no route
//! - `Internal`: anything unexpected while serving a request
//!
//! Malformed query parameters are deliberately absent from this list: they
//! degrade to defaults instead of failing.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_listing(key: String) -> Result<Listing, ApiError> {
//!     service
//!         .get(&key)
//!         .await
//!         .map_err(|e| ApiError::internal("fetch listing details", e))?
//!         .ok_or_else(|| ListingError::NotFound { listing_key: key }.into())
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

use crate::core::response::ApiResponse;

/// The main error type for the listing API
#[derive(Debug)]
pub enum ApiError {
    /// Listing lookups
    Listing(ListingError),

    /// Fixture loading
    Data(DataError),

    /// Routing
    Request(RequestError),

    /// Unexpected failure while serving a request
    ///
    /// `context` names the operation that failed ("fetch listings") and
    /// becomes the error title; panics carry no context.
    Internal {
        context: Option<String>,
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Listing(e) => write!(f, "{}", e),
            ApiError::Data(e) => write!(f, "{}", e),
            ApiError::Request(e) => write!(f, "{}", e),
            ApiError::Internal { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Listing(e) => Some(e),
            ApiError::Data(e) => Some(e),
            ApiError::Request(e) => Some(e),
            ApiError::Internal { .. } => None,
        }
    }
}

impl ApiError {
    /// Wrap an unexpected failure of the named operation
    pub fn internal(context: impl Into<String>, err: impl fmt::Display) -> Self {
        ApiError::Internal {
            context: Some(context.into()),
            message: err.to_string(),
        }
    }

    /// A failure nobody attributed to an operation, e.g. a caught panic
    pub fn unhandled(message: impl Into<String>) -> Self {
        ApiError::Internal {
            context: None,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Listing(e) => e.status_code(),
            ApiError::Data(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Request(e) => e.status_code(),
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Listing(e) => e.error_code(),
            ApiError::Data(_) => "DATA_UNAVAILABLE",
            ApiError::Request(e) => e.error_code(),
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Short title rendered as the envelope's `error` field
    pub fn title(&self) -> String {
        match self {
            ApiError::Listing(e) => e.title().to_string(),
            ApiError::Data(_) => "Listing data unavailable".to_string(),
            ApiError::Request(e) => e.title().to_string(),
            ApiError::Internal {
                context: Some(context),
                ..
            } => format!("Failed to {}", context),
            ApiError::Internal { context: None, .. } => "Internal server error".to_string(),
        }
    }

    /// Convert to the JSON envelope
    pub fn to_response(&self) -> ApiResponse<()> {
        ApiResponse::failure(self.title(), self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "{}", self.title());
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Listing Errors
// =============================================================================

/// Errors related to listing lookups
#[derive(Debug)]
pub enum ListingError {
    /// No listing has this key
    NotFound { listing_key: String },
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::NotFound { listing_key } => {
                write!(f, "No listing found with key: {}", listing_key)
            }
        }
    }
}

impl std::error::Error for ListingError {}

impl ListingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListingError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ListingError::NotFound { .. } => "LISTING_NOT_FOUND",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListingError::NotFound { .. } => "Listing not found",
        }
    }
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        ApiError::Listing(err)
    }
}

// =============================================================================
// Data Errors
// =============================================================================

/// The listing fixture could not be turned into a store
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("listing fixture '{path}' could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listing fixture is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("listing key '{listing_key}' appears more than once")]
    DuplicateKey { listing_key: String },

    #[error("listing '{listing_key}' has an invalid {field}: {reason}")]
    InvalidField {
        listing_key: String,
        field: &'static str,
        reason: String,
    },
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        ApiError::Data(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the HTTP request itself
#[derive(Debug)]
pub enum RequestError {
    /// No route matches the method and path
    RouteNotFound { method: String, path: String },

    /// A path segment could not be extracted (e.g. invalid UTF-8)
    InvalidPath { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::RouteNotFound { method, path } => {
                write!(f, "Route {} {} not found", method, path)
            }
            RequestError::InvalidPath { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::InvalidPath { .. } => "INVALID_PATH",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RequestError::RouteNotFound { .. } => "Not found",
            RequestError::InvalidPath { .. } => "Bad request",
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}
