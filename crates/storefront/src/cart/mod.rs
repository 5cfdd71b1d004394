//! The cart store.
//!
//! [`CartStore`] owns the session's [`Cart`] and exposes the three mutating
//! operations plus a read-only snapshot:
//!
//! - [`CartStore::add_product`] - add one unit, checking stock first
//! - [`CartStore::remove_product`] - drop a product's line entirely
//! - [`CartStore::update_product_amount`] - set a line to an exact quantity
//! - [`CartStore::cart`] / [`CartStore::subscribe`] - read and observe
//!
//! # State model
//!
//! The cart is never modified in place. Each operation builds a new [`Cart`],
//! writes it to storage, and only then swaps it in and notifies subscribers,
//! so the persisted copy and the in-memory copy always agree. Mutations are
//! serialized: an operation holds the write lock for its whole duration,
//! including any awaited API call. Readers never block.
//!
//! # Errors
//!
//! Failures are returned as [`CartError`] and reported once through the
//! [`Notifier`] with the operation's fixed message.

use std::num::NonZeroU32;
use std::sync::Arc;

use rocketshoes_core::{Cart, ProductId};
use tokio::sync::{Mutex, watch};
use tracing::instrument;

use crate::catalog::{ProductService, StockService};
use crate::error::{CartError, CartOperation, Result};
use crate::notify::Notifier;
use crate::storage::{CartStorage, StorageError};

/// Smallest stock level at which a product may be added to the cart.
///
/// Adding is refused when stock is 1 or less, even though a single unit would
/// technically be available.
pub const MIN_STOCK_TO_ADD: i32 = 2;

/// Request to set a cart line to an exact quantity.
///
/// `amount` is signed because it comes straight from user input; anything
/// below 1 is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i32,
}

/// Session cart state with stock-checked mutations.
///
/// Cheap to clone; clones share the same cart.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    stock: Arc<dyn StockService>,
    products: Arc<dyn ProductService>,
    storage: CartStorage,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<Arc<Cart>>,
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Initialize the store from persisted storage (empty if nothing stored).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the persisted cart cannot be read or is
    /// malformed.
    pub fn load(
        stock: Arc<dyn StockService>,
        products: Arc<dyn ProductService>,
        storage: CartStorage,
        notifier: Arc<dyn Notifier>,
    ) -> std::result::Result<Self, StorageError> {
        let cart = storage.load()?;
        tracing::debug!(items = cart.len(), "Cart loaded from storage");

        let (state, _) = watch::channel(Arc::new(cart));

        Ok(Self {
            inner: Arc::new(CartStoreInner {
                stock,
                products,
                storage,
                notifier,
                state,
                write_lock: Mutex::new(()),
            }),
        })
    }

    /// Current cart snapshot.
    #[must_use]
    pub fn cart(&self) -> Arc<Cart> {
        Arc::clone(&self.inner.state.borrow())
    }

    /// Observe cart replacements. The receiver starts at the current cart.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.inner.state.subscribe()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add one unit of a product.
    ///
    /// Checks stock first and refuses when fewer than [`MIN_STOCK_TO_ADD`]
    /// units are available. A product already in the cart has its quantity
    /// incremented; otherwise its metadata is fetched and a new line with
    /// quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// - `CartError::OutOfStock` if stock is too low
    /// - `CartError::Network` if a catalogue call fails
    /// - `CartError::Storage` if the new cart cannot be persisted
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<()> {
        let _guard = self.inner.write_lock.lock().await;
        let outcome = self.try_add(product_id).await;
        self.report(CartOperation::Add, outcome)
    }

    /// Remove a product's line entirely.
    ///
    /// # Errors
    ///
    /// - `CartError::NotFound` if the product is not in the cart
    /// - `CartError::Storage` if the new cart cannot be persisted
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<()> {
        let _guard = self.inner.write_lock.lock().await;
        let outcome = self.try_remove(product_id);
        self.report(CartOperation::Remove, outcome)
    }

    /// Set a product's quantity to exactly `amount`.
    ///
    /// Amounts below 1 are ignored: no API call, no change, no notification.
    /// Stock is checked before anything else, so a product that is not in the
    /// cart still gets the out-of-stock rejection when `amount` is too high;
    /// otherwise an absent product leaves the cart untouched and succeeds.
    ///
    /// # Errors
    ///
    /// - `CartError::OutOfStock` if `amount` exceeds available stock
    /// - `CartError::Network` if the stock check fails
    /// - `CartError::Storage` if the new cart cannot be persisted
    #[instrument(skip(self), fields(product_id = %request.product_id, amount = request.amount))]
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Result<()> {
        let Some(amount) = u32::try_from(request.amount)
            .ok()
            .and_then(NonZeroU32::new)
        else {
            tracing::debug!("Ignoring quantity below 1");
            return Ok(());
        };

        let _guard = self.inner.write_lock.lock().await;
        let outcome = self.try_update_amount(request.product_id, amount).await;
        self.report(CartOperation::UpdateAmount, outcome)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn try_add(&self, product_id: ProductId) -> Result<()> {
        let stock = self.inner.stock.stock(product_id).await?;
        if stock.amount < MIN_STOCK_TO_ADD {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock.amount,
            });
        }

        let current = self.cart();
        let next = match current.with_incremented(product_id) {
            Some(next) => next,
            None => {
                let product = self.inner.products.product(product_id).await?;
                current.with_new_item(product)
            }
        };

        self.commit(next)
    }

    fn try_remove(&self, product_id: ProductId) -> Result<()> {
        let next = self
            .cart()
            .without(product_id)
            .ok_or(CartError::NotFound(product_id))?;

        self.commit(next)
    }

    async fn try_update_amount(&self, product_id: ProductId, amount: NonZeroU32) -> Result<()> {
        let stock = self.inner.stock.stock(product_id).await?;
        if i64::from(stock.amount) < i64::from(amount.get()) {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock.amount,
            });
        }

        let Some(next) = self.cart().with_amount(product_id, amount) else {
            tracing::debug!("Product not in cart, nothing to update");
            return Ok(());
        };

        self.commit(next)
    }

    /// Persist `next`, then make it the current cart.
    fn commit(&self, next: Cart) -> Result<()> {
        self.inner.storage.save(&next)?;
        tracing::debug!(items = next.len(), "Cart replaced");
        self.inner.state.send_replace(Arc::new(next));
        Ok(())
    }

    /// Log and notify a failed operation; pass the outcome through.
    fn report(&self, operation: CartOperation, outcome: Result<()>) -> Result<()> {
        if let Err(err) = &outcome {
            if err.is_rejection() {
                tracing::warn!(?operation, error = %err, "Cart operation rejected");
            } else {
                tracing::error!(?operation, error = %err, "Cart operation failed");
            }
            self.inner.notifier.error(err.user_message(operation));
        }
        outcome
    }
}
