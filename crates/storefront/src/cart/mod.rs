//! The cart state manager.
//!
//! [`CartStore`] owns the authoritative list of line items. Every UI action
//! funnels through one of its four mutations (`add_item`, `remove_item`,
//! `set_quantity`, `clear`), each of which writes the full list back to
//! storage before returning. Reads (`items`, `count`, `total`) are computed
//! from the current list on every call.
//!
//! # Invariants
//!
//! - Names are unique; a repeated add bumps the existing line.
//! - Every stored line has a quantity of at least one.
//! - The first price seen for a name is the one kept.

pub mod persistence;

use std::num::NonZeroU32;

use corner_shop_core::{LineItem, Price, ProductName};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use crate::error::CartError;
use crate::storage::KeyValueStore;

pub use persistence::DEFAULT_CART_KEY;

/// Single-owner cart with write-through persistence.
///
/// Mutations take `&mut self`, so two changes can never interleave on the same
/// cart. If a write fails, the in-memory change stays applied and the error is
/// returned; the caller decides whether to tell the user that the change may
/// not survive a reload.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    items: Vec<LineItem>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart saved under [`DEFAULT_CART_KEY`].
    #[must_use]
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_CART_KEY)
    }

    /// Open the cart saved under `key`, or an empty cart if there is none.
    ///
    /// Unreadable or malformed saved data is discarded with a warning.
    #[must_use]
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = persistence::load(&storage, &key);
        Self {
            storage,
            key,
            items,
        }
    }

    /// Add one unit of `name`.
    ///
    /// An existing line is incremented and keeps its original price. A new
    /// line is appended with a quantity of one. A blank name or a negative
    /// price is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn add_item(&mut self, name: &str, unit_price: Decimal) -> Result<(), CartError> {
        let (name, unit_price) = match (ProductName::parse(name), Price::new(unit_price)) {
            (Ok(name), Ok(price)) => (name, price),
            (Err(e), _) => {
                warn!(error = %e, "Ignoring add to cart");
                return Ok(());
            }
            (_, Err(e)) => {
                warn!(error = %e, "Ignoring add to cart");
                return Ok(());
            }
        };

        if let Some(item) = self.find_mut(name.as_str()) {
            item.increment();
            debug!(quantity = item.quantity(), "Incremented cart line");
        } else {
            debug!(%unit_price, "Appended cart line");
            self.items.push(LineItem::new(name, unit_price));
        }

        self.persist()
    }

    /// Remove the line for `name`. Removing an absent name changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be saved.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, name: &str) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|item| item.name() != name);
        debug!(removed = before - self.items.len(), "Removed cart line");
        self.persist()
    }

    /// Set the quantity of `name` to exactly `quantity`.
    ///
    /// Zero or below removes the line. Unknown names are ignored and nothing
    /// is written. Quantities past `u32::MAX` are capped.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> Result<(), CartError> {
        if self.get(name).is_none() {
            debug!("Ignoring quantity change for item not in cart");
            return Ok(());
        }

        if quantity <= 0 {
            return self.remove_item(name);
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);

        if let Some(item) = self.find_mut(name) {
            item.set_quantity(quantity);
        }
        self.persist()
    }

    /// Empty the cart and save the empty list.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the empty cart cannot be saved.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        debug!("Cleared cart");
        self.persist()
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Badge count: total units across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Sum of `unit_price * quantity` over all lines, unrounded.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.subtotal()))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key the cart is saved under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, dropping the in-memory cart.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    fn persist(&mut self) -> Result<(), CartError> {
        persistence::save(&mut self.storage, &self.key, &self.items).inspect_err(|e| {
            warn!(key = %self.key, error = %e, "Cart change not saved");
        })
    }
}
