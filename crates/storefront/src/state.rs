//! Application state built once at the application root.
//!
//! `AppState` wires configuration, the catalogue client, storage and the
//! notification sink into a single [`CartStore`], then hands out cheap clones
//! to whatever needs them. Nothing reaches the cart through globals.

use std::sync::Arc;

use thiserror::Error;

use crate::cart::CartStore;
use crate::catalog::ApiClient;
use crate::config::StorefrontConfig;
use crate::notify::Notifier;
use crate::storage::{CartStorage, FileStore, KeyValueStore, StorageError};

/// Error building the application state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to open cart storage: {0}")]
    Storage(#[from] StorageError),
}

/// Application state shared across all cart consumers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: ApiClient,
    cart: CartStore,
}

impl AppState {
    /// Create the application state with file-backed storage at
    /// `config.storage_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file or the cart stored in it cannot
    /// be read.
    pub fn new(config: StorefrontConfig, notifier: Arc<dyn Notifier>) -> Result<Self, StateError> {
        let store = FileStore::open(&config.storage_path)?;
        Self::with_store(config, Arc::new(store), notifier)
    }

    /// Create the application state over an arbitrary key-value store.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart stored in `store` cannot be read.
    pub fn with_store(
        config: StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StateError> {
        let catalog = ApiClient::new(&config.api);
        let client = Arc::new(catalog.clone());
        let cart = CartStore::load(
            client.clone(),
            client,
            CartStorage::new(store),
            notifier,
        )?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalogue API client.
    #[must_use]
    pub fn catalog(&self) -> &ApiClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
