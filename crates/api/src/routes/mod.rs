//! HTTP route handlers for the catalogue API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Health check
//!
//! # Products
//! GET  /products        - Product listing
//! GET  /products/{id}   - Product detail
//!
//! # Stock
//! GET  /stock           - Stock for every product
//! GET  /stock/{id}      - Stock for one product
//! ```

pub mod products;
pub mod stock;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the catalogue routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/stock", get(stock::index))
        .route("/stock/{id}", get(stock::show))
}
