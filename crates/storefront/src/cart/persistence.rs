//! Reading and writing the cart's durable representation.
//!
//! The stored value is a JSON array of line items in insertion order:
//!
//! ```json
//! [{"name":"Widget","price":19.99,"quantity":2}]
//! ```
//!
//! Loading never fails. A missing key, a backend read error, or a value that
//! does not decode into a well-formed cart all yield an empty cart.

use std::collections::HashSet;

use corner_shop_core::LineItem;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::CartError;
use crate::storage::KeyValueStore;

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Reasons a stored value is not a usable cart.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or JSON of the wrong shape (bad names, prices, quantities).
    #[error("malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two lines share a name, which breaks the one-line-per-product rule.
    #[error("duplicate line item: {0}")]
    DuplicateName(String),
}

/// Encode `items` and write them under `key`.
///
/// # Errors
///
/// Returns `CartError` if encoding fails or the backend rejects the write.
pub fn save<S: KeyValueStore + ?Sized>(
    storage: &mut S,
    key: &str,
    items: &[LineItem],
) -> Result<(), CartError> {
    let encoded = serde_json::to_string(items)?;
    storage.set(key, &encoded)?;
    debug!(key, lines = items.len(), bytes = encoded.len(), "Cart saved");
    Ok(())
}

/// Read the cart stored under `key`, falling back to an empty cart.
#[must_use]
pub fn load<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Vec<LineItem> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No saved cart, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read saved cart, starting empty");
            return Vec::new();
        }
    };

    match decode(&raw) {
        Ok(items) => {
            debug!(key, lines = items.len(), "Cart restored");
            items
        }
        Err(e) => {
            warn!(key, error = %e, "Discarding unusable saved cart");
            Vec::new()
        }
    }
}

/// Decode a stored value.
///
/// A JSON `null` decodes to an empty cart.
///
/// # Errors
///
/// Returns `DecodeError` if the value is not a well-formed cart.
pub fn decode(raw: &str) -> Result<Vec<LineItem>, DecodeError> {
    let items: Vec<LineItem> = serde_json::from_str::<Option<Vec<LineItem>>>(raw)?
        .unwrap_or_default();

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.name().as_str()) {
            return Err(DecodeError::DuplicateName(item.name().to_string()));
        }
    }

    Ok(items)
}
