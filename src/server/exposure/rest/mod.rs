//! REST API exposure for the listing service
//!
//! Assembles the listing routes, the JSON fallbacks and the HTTP middleware
//! (CORS, request tracing, panic recovery) into one Axum `Router`.

use crate::core::ApiError;
use crate::server::handlers::{AppState, route_not_found};
use crate::server::router::build_listing_routes;
use anyhow::Result;
use axum::Router;
use axum::response::{IntoResponse, Response};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `state` - Shared handler state
    /// * `custom_routes` - Additional routes to merge before the fallbacks
    ///
    /// # Returns
    ///
    /// A router serving the listing endpoints where every unmatched request
    /// gets a structured 404 and every panic a structured 500.
    pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = build_listing_routes(state);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        // Each layer wraps the previous one, so CORS is outermost and its
        // headers land on panic and 404 responses too
        let app = app
            .fallback(route_not_found)
            .method_not_allowed_fallback(route_not_found)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        Ok(app)
    }
}

/// Render a caught panic as the 500 envelope
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    ApiError::unhandled(message).into_response()
}
