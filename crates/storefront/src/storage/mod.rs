//! Key-value persistence for the cart.
//!
//! The cart is stored as a single JSON document under [`CART_KEY`], the way a
//! browser storefront keeps it in local storage. Backends implement
//! [`KeyValueStore`]; [`CartStorage`] layers the cart's (de)serialization on
//! top.
//!
//! Writes are synchronous and happen on every successful cart mutation.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use rocketshoes_core::Cart;
use thiserror::Error;

/// Storage key the serialized cart lives under.
pub const CART_KEY: &str = "@RocketShoes:cart";

/// Errors raised by storage backends and cart (de)serialization.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data is not valid JSON of the expected shape.
    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string key-value store.
///
/// Uses `&self` for all methods; implementations use interior mutability.
pub trait KeyValueStore: Send + Sync {
    /// Retrieve a value by key. Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and writes the cart under [`CART_KEY`].
#[derive(Clone)]
pub struct CartStorage {
    store: Arc<dyn KeyValueStore>,
}

impl CartStorage {
    /// Wrap a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted cart, or an empty cart if nothing is stored.
    ///
    /// No migration or repair is attempted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Json` if the stored value is malformed, or an
    /// I/O error from the backend.
    pub fn load(&self) -> Result<Cart, StorageError> {
        match self.store.get(CART_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Cart::new()),
        }
    }

    /// Replace the persisted cart with `cart`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.store.set(CART_KEY, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rocketshoes_core::{Price, Product, ProductId};

    use super::*;

    fn sample_cart() -> Cart {
        Cart::new().with_new_item(Product {
            id: ProductId::new(1),
            title: "Tênis de Caminhada Leve Confortável".to_string(),
            price: Price::from_cents(17990),
            image: "https://cdn.rocketshoes.test/1.jpg".to_string(),
        })
    }

    #[test]
    fn test_load_missing_key_is_empty_cart() {
        let storage = CartStorage::new(Arc::new(MemoryStore::new()));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = Arc::new(MemoryStore::new());
        let storage = CartStorage::new(store.clone());
        let cart = sample_cart();

        storage.save(&cart).unwrap();

        assert_eq!(storage.load().unwrap(), cart);
        assert!(store.get(CART_KEY).unwrap().unwrap().starts_with('['));
    }

    #[test]
    fn test_load_malformed_value_fails() {
        let store = Arc::new(MemoryStore::new());
        store.set(CART_KEY, "{not json").unwrap();

        let err = CartStorage::new(store).load().unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
