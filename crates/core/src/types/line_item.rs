//! Cart line items.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Price, ProductName};

/// One product entry in a cart with its own quantity.
///
/// The quantity is a [`NonZeroU32`], so a line item can never exist with a
/// quantity below one, whether built in code or deserialized from storage.
///
/// Serialized form matches the durable storage format:
///
/// ```json
/// {"name":"Widget","price":19.99,"quantity":2}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: ProductName,
    #[serde(rename = "price")]
    unit_price: Price,
    quantity: NonZeroU32,
}

impl LineItem {
    /// Create a line item with a quantity of one.
    #[must_use]
    pub const fn new(name: ProductName, unit_price: Price) -> Self {
        Self {
            name,
            unit_price,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Create a line item with an explicit quantity.
    #[must_use]
    pub const fn with_quantity(name: ProductName, unit_price: Price, quantity: NonZeroU32) -> Self {
        Self {
            name,
            unit_price,
            quantity,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &ProductName {
        &self.name
    }

    /// Unit price, fixed when the item was first added.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.times(self.quantity.get())
    }

    /// Add one unit. Saturates at `u32::MAX`.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Replace the quantity.
    pub const fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}
