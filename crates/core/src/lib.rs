//! Corner Shop Core - Shared cart types.
//!
//! This crate provides the types used across all Corner Shop components:
//! - `storefront` - Cart store, persistence, rendering and checkout
//! - `cli` - Command-line consumer that drives the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated product names, prices, and line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
