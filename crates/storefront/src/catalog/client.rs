//! Catalogue API client implementation.
//!
//! Uses `reqwest` for HTTP. Caches product metadata using `moka`
//! (5-minute TTL by default).

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use rocketshoes_core::{Product, ProductId, Stock};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::cache::{CacheKey, CacheValue};
use super::{ApiError, ProductService, StockService};
use crate::config::CatalogApiConfig;

/// Longest response body excerpt included in logs and errors.
const BODY_EXCERPT_LEN: usize = 500;

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the RocketShoes catalogue API.
///
/// Cheap to clone; clones share the connection pool and the product cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new catalogue API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.product_cache_ttl)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Issue a GET for `path` (relative to the base URL) and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.inner.base_url.join(path)?;

        let response = self
            .inner
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                path,
                body = %excerpt(&response_text),
                "Catalogue API returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: excerpt(&response_text),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path,
                body = %excerpt(&response_text),
                "Failed to parse catalogue API response"
            );
            ApiError::Parse(e)
        })
    }

    // =========================================================================
    // Stock Methods
    // =========================================================================

    /// Get the available stock for a product.
    ///
    /// Never cached: the cart must see the current quantity on every check.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_stock(&self, id: ProductId) -> Result<Stock, ApiError> {
        self.get_json(&format!("stock/{id}")).await
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a product's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let cache_key = CacheKey::Product(id);

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self.get_json(&format!("products/{id}")).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// List the whole catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Arc<Vec<Product>>, ApiError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let products: Arc<Vec<Product>> = Arc::new(self.get_json("products").await?);

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;

        Ok(products)
    }
}

#[async_trait]
impl StockService for ApiClient {
    async fn stock(&self, id: ProductId) -> Result<Stock, ApiError> {
        self.get_stock(id).await
    }
}

#[async_trait]
impl ProductService for ApiClient {
    async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get_product(id).await
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}
