//! Core types for Corner Shop.
//!
//! This module provides type-safe wrappers for cart domain concepts.

pub mod line_item;
pub mod price;
pub mod product_name;

pub use line_item::LineItem;
pub use price::{Price, PriceError, format_money};
pub use product_name::{ProductName, ProductNameError};
