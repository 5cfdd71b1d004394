//! RocketShoes Storefront library.
//!
//! Client-side cart state for the RocketShoes storefront: a stock-checked
//! cart store persisted to a key-value store after every change.
//!
//! # Modules
//!
//! - [`cart`] - The cart store and its operations
//! - [`catalog`] - Stock and product API clients
//! - [`storage`] - Key-value persistence of the cart
//! - [`notify`] - Notification sink for user-visible errors
//! - [`state`] - Application root wiring everything together
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rocketshoes_storefront::{config::StorefrontConfig, notify::TracingNotifier, state::AppState};
//!
//! let state = AppState::new(StorefrontConfig::from_env()?, Arc::new(TracingNotifier))?;
//! state.cart().add_product(ProductId::new(1)).await?;
//! println!("{} items", state.cart().cart().len());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;

pub use cart::{CartStore, UpdateProductAmount};
pub use error::{CartError, CartOperation};
