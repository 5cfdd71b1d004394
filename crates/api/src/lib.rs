//! RocketShoes catalogue API library.
//!
//! Serves products and stock levels to the storefront. This crate provides
//! the server as a library so it can be tested and embedded in integration
//! tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalogue;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router: health check, catalogue routes,
/// request tracing and permissive CORS for browser storefronts.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
