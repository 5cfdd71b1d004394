//! Catalogue API clients.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`: `GET /stock/{id}` and `GET /products/{id}`
//! - The catalogue service is source of truth - the cart only keeps copies of
//!   product metadata taken when an item is first added
//! - Product metadata is cached in memory via `moka`; stock never is
//!
//! The cart store depends on the [`StockService`] and [`ProductService`]
//! traits rather than on [`ApiClient`] directly, so tests and alternative
//! backends can stand in for the HTTP client.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketshoes_storefront::catalog::{ApiClient, StockService};
//!
//! let client = ApiClient::new(&config.api);
//! let stock = client.stock(ProductId::new(1)).await?;
//! ```

mod cache;
mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use rocketshoes_core::{Product, ProductId, Stock};
use thiserror::Error;

/// Errors that can occur when talking to the catalogue API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Reads available stock for a product.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Current stock for `id`.
    async fn stock(&self, id: ProductId) -> Result<Stock, ApiError>;
}

/// Reads product metadata.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Metadata for `id`.
    async fn product(&self, id: ProductId) -> Result<Product, ApiError>;
}
