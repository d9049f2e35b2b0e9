//! Corner Shop Storefront library.
//!
//! The cart behind a static storefront page: a single [`CartStore`] owns the
//! line items and writes them through to durable key-value storage after
//! every change. Rendering and checkout are consumers that only read the
//! store (and, for checkout, call `clear`).
//!
//! # Modules
//!
//! - [`cart`] - The cart store and its storage format
//! - [`storage`] - Key-value backends (memory, files)
//! - [`render`] - View models and templates for the cart and badge
//! - [`checkout`] - Simulated checkout
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod render;
pub mod storage;

pub use cart::CartStore;
pub use error::{CartError, RenderError};
