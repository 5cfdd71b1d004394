//! RocketShoes Core - Shared types library.
//!
//! This crate provides common types used across all RocketShoes components:
//! - `storefront` - Client-side cart store, catalogue clients and persistence
//! - `api` - Catalogue REST backend (products and stock)
//! - `cli` - Command-line front end for browsing and managing the cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, catalogue records and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
