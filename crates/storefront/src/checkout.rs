//! Simulated checkout.
//!
//! There is no payment provider behind this. Checkout shows the shopper what
//! they are about to buy, asks for confirmation, and empties the cart if they
//! agree.

use corner_shop_core::format_money;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::cart::CartStore;
use crate::error::CartError;
use crate::storage::KeyValueStore;

/// Shown when checkout is attempted with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";

/// Shown after a confirmed checkout.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your order! This is a demo storefront, so no \
    actual payment was processed. A real shop would hand off to a secure payment gateway here.";

/// What the shopper is asked to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub total: Decimal,
}

impl CheckoutSummary {
    /// Confirmation prompt text.
    #[must_use]
    pub fn prompt(&self, symbol: &str) -> String {
        format!(
            "Proceed to checkout?\n\nItems: {}\nTotal: {}\n\n\
             This is a demo storefront - no actual payment will be processed.",
            self.item_count,
            format_money(self.total, symbol)
        )
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out. The cart was not touched.
    Empty,
    /// The shopper backed out. The cart was not touched.
    Declined(CheckoutSummary),
    /// The shopper confirmed and the cart was cleared.
    Completed(CheckoutSummary),
}

impl CheckoutOutcome {
    /// Message to show the shopper, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(EMPTY_CART_MESSAGE),
            Self::Declined(_) => None,
            Self::Completed(_) => Some(THANK_YOU_MESSAGE),
        }
    }
}

/// Run checkout against `cart`.
///
/// `confirm` is called at most once, and only when the cart has items. On
/// confirmation the cart is cleared exactly once.
///
/// # Errors
///
/// Returns `CartError` if the cleared cart cannot be saved. The in-memory
/// cart is empty in that case.
#[instrument(skip(cart, confirm))]
pub fn checkout<S, F>(cart: &mut CartStore<S>, confirm: F) -> Result<CheckoutOutcome, CartError>
where
    S: KeyValueStore,
    F: FnOnce(&CheckoutSummary) -> bool,
{
    let item_count = cart.count();
    if item_count == 0 {
        info!("Checkout attempted with empty cart");
        return Ok(CheckoutOutcome::Empty);
    }

    let summary = CheckoutSummary {
        item_count,
        total: cart.total(),
    };
    info!(item_count, total = %summary.total, "Checkout initiated");

    if !confirm(&summary) {
        info!("Checkout declined");
        return Ok(CheckoutOutcome::Declined(summary));
    }

    cart.clear()?;
    info!(item_count, total = %summary.total, "Checkout completed");
    Ok(CheckoutOutcome::Completed(summary))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    /// Counts writes so tests can check how often the cart was saved.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: usize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes += 1;
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn filled_cart() -> CartStore<CountingStore> {
        let mut cart = CartStore::open(CountingStore::default());
        cart.add_item("A", Decimal::new(10, 0)).unwrap();
        cart.add_item("B", Decimal::new(5, 0)).unwrap();
        cart.set_quantity("A", 2).unwrap();
        cart.set_quantity("B", 3).unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_is_rejected_without_asking() {
        let mut cart = CartStore::open(CountingStore::default());
        let asked = Cell::new(false);

        let outcome = checkout(&mut cart, |_| {
            asked.set(true);
            true
        })
        .unwrap();

        assert_eq!(outcome, CheckoutOutcome::Empty);
        assert_eq!(outcome.message(), Some(EMPTY_CART_MESSAGE));
        assert!(!asked.get());
        assert_eq!(cart.storage().writes, 0);
    }

    #[test]
    fn test_confirmed_checkout_clears_once() {
        let mut cart = filled_cart();
        let writes_before = cart.storage().writes;

        let outcome = checkout(&mut cart, |summary| {
            assert_eq!(summary.item_count, 5);
            assert_eq!(summary.total, Decimal::new(35, 0));
            true
        })
        .unwrap();

        assert_eq!(
            outcome,
            CheckoutOutcome::Completed(CheckoutSummary {
                item_count: 5,
                total: Decimal::new(35, 0),
            })
        );
        assert!(cart.is_empty());
        assert_eq!(cart.storage().writes - writes_before, 1);
        assert_eq!(
            cart.storage().get("cart").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_declined_checkout_keeps_cart() {
        let mut cart = filled_cart();
        let items = cart.items().to_vec();
        let writes_before = cart.storage().writes;

        let outcome = checkout(&mut cart, |_| false).unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Declined(_)));
        assert_eq!(outcome.message(), None);
        assert_eq!(cart.items(), items.as_slice());
        assert_eq!(cart.storage().writes, writes_before);
    }

    #[test]
    fn test_prompt_text() {
        let summary = CheckoutSummary {
            item_count: 5,
            total: Decimal::new(35, 0),
        };
        let prompt = summary.prompt("R");
        assert!(prompt.starts_with("Proceed to checkout?"));
        assert!(prompt.contains("Items: 5"));
        assert!(prompt.contains("Total: R35.00"));
        assert!(prompt.contains("no actual payment"));
    }

    #[test]
    fn test_failed_save_after_confirm() {
        let mut cart = CartStore::open(
            MemoryStore::with_quota(0).with_entry("cart", r#"[{"name":"A","price":1,"quantity":1}]"#),
        );
        assert_eq!(cart.count(), 1);

        let result = checkout(&mut cart, |_| true);
        assert!(matches!(
            result,
            Err(CartError::Storage(StorageError::QuotaExceeded { .. }))
        ));
        assert!(cart.is_empty());
    }
}
