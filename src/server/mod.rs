//! Server module for the listing HTTP API
//!
//! This module provides a `ServerBuilder` that wires a `ListingService` into:
//! - the five `/api` listing routes
//! - JSON 404 and panic fallbacks
//! - CORS and request tracing middleware

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
