//! Integration tests for Corner Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p corner-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Carts surviving restarts through the file store
//! - `cart_checkout` - End-to-end shopping flows through rendering and checkout
//!
//! Every "page load" in these tests opens a fresh [`CartStore`] over the same
//! storage directory, the way each run of the CLI does.

use std::path::Path;

use corner_shop_storefront::CartStore;
use corner_shop_storefront::storage::FileStore;

/// Open the cart saved in `dir`, as a new page view would.
#[must_use]
pub fn page_load(dir: &Path) -> CartStore<FileStore> {
    CartStore::open(FileStore::new(dir))
}

/// Parse a decimal literal.
///
/// # Panics
///
/// Panics if `s` is not a valid decimal. Test fixtures only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn dec(s: &str) -> rust_decimal::Decimal {
    s.parse().unwrap()
}
