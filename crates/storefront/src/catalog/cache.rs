//! Cache types for catalogue API responses.

use std::sync::Arc;

use rocketshoes_core::{Product, ProductId};

/// Cache key for product metadata.
///
/// Stock is deliberately absent: every stock check goes to the API.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Product(ProductId),
    Products,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Arc<Vec<Product>>),
}
