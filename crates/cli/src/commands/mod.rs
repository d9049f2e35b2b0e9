//! Subcommand implementations.
//!
//! Handlers take the cart and an output writer rather than touching stdout
//! directly, so they can be exercised against in-memory storage in tests.

pub mod cart;
pub mod checkout;
