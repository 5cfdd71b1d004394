//! The shopping cart.
//!
//! A [`Cart`] is an ordered list of [`CartItem`]s, unique by product ID, where
//! insertion order is display order. Carts are values: every operation builds
//! a new cart and leaves the receiver untouched, so a store can swap the whole
//! value in once the change has been persisted.
//!
//! Serialized as a bare JSON array of items:
//!
//! ```json
//! [{ "id": 1, "title": "Tênis", "price": 179.9, "image": "https://...", "amount": 2 }]
//! ```

use std::collections::HashMap;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// A product held in the cart, with the quantity held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    /// Quantity held in the cart (always at least 1).
    pub amount: u32,
}

impl CartItem {
    /// A new cart line for `product` holding a single unit.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Line subtotal (`price × amount`).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.amount)
    }
}

/// Ordered collection of cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Iterate over cart lines in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the product is in the cart.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity held per product, for listing badges.
    #[must_use]
    pub fn amounts(&self) -> HashMap<ProductId, u32> {
        self.items.iter().map(|item| (item.id, item.amount)).collect()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// A copy of this cart with `product` appended as a single unit.
    ///
    /// If the product is already present its quantity is incremented instead,
    /// so the cart never holds two lines for one product.
    #[must_use]
    pub fn with_new_item(&self, product: Product) -> Self {
        if let Some(cart) = self.with_incremented(product.id) {
            return cart;
        }
        let mut items = self.items.clone();
        items.push(CartItem::new(product));
        Self { items }
    }

    /// A copy of this cart with the product's quantity raised by one.
    ///
    /// Returns `None` if the product is not in the cart.
    #[must_use]
    pub fn with_incremented(&self, id: ProductId) -> Option<Self> {
        let current = self.get(id)?.amount;
        self.replacing_amount(id, current.saturating_add(1))
    }

    /// A copy of this cart with the product's quantity set to exactly `amount`.
    ///
    /// Returns `None` if the product is not in the cart.
    #[must_use]
    pub fn with_amount(&self, id: ProductId, amount: NonZeroU32) -> Option<Self> {
        self.replacing_amount(id, amount.get())
    }

    /// A copy of this cart without the product's line.
    ///
    /// Returns `None` if the product is not in the cart.
    #[must_use]
    pub fn without(&self, id: ProductId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Some(Self { items })
    }

    fn replacing_amount(&self, id: ProductId, amount: u32) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    CartItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Some(Self { items })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
