//! In-memory catalogue loaded from the JSON seed file.
//!
//! The seed file has the layout:
//!
//! ```json
//! {
//!   "products": [{ "id": 1, "title": "...", "price": 179.9, "image": "..." }],
//!   "stock": [{ "id": 1, "amount": 3 }]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use rocketshoes_core::{Product, ProductId, Stock};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading the catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
    #[error("duplicate stock entry for product {0}")]
    DuplicateStock(ProductId),
}

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    stock: Vec<Stock>,
}

/// Products and stock levels, indexed by product ID.
#[derive(Debug, Default)]
pub struct Catalogue {
    products: Vec<Product>,
    product_index: HashMap<ProductId, usize>,
    stock: Vec<Stock>,
    stock_index: HashMap<ProductId, usize>,
}

impl Catalogue {
    /// Load the catalogue from a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// lists the same product twice.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalogue from seed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or lists the same product twice.
    pub fn from_json(raw: &str) -> Result<Self, CatalogueError> {
        let seed: SeedFile = serde_json::from_str(raw)?;
        Self::new(seed.products, seed.stock)
    }

    /// Build a catalogue from products and stock levels.
    ///
    /// Products keep the given order in listings.
    ///
    /// # Errors
    ///
    /// Returns an error if a product or stock entry appears twice.
    pub fn new(products: Vec<Product>, stock: Vec<Stock>) -> Result<Self, CatalogueError> {
        let mut product_index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product_index.insert(product.id, position).is_some() {
                return Err(CatalogueError::DuplicateProduct(product.id));
            }
        }

        let mut stock_index = HashMap::with_capacity(stock.len());
        for (position, entry) in stock.iter().enumerate() {
            if stock_index.insert(entry.id, position).is_some() {
                return Err(CatalogueError::DuplicateStock(entry.id));
            }
        }

        Ok(Self {
            products,
            product_index,
            stock,
            stock_index,
        })
    }

    /// All products, in seed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// A single product.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// All stock entries, in seed order.
    #[must_use]
    pub fn stock(&self) -> &[Stock] {
        &self.stock
    }

    /// Stock for a single product.
    #[must_use]
    pub fn stock_for(&self, id: ProductId) -> Option<Stock> {
        self.stock_index
            .get(&id)
            .and_then(|&position| self.stock.get(position))
            .copied()
    }
}
