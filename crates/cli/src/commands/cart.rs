//! Cart editing and display commands.

use std::io::Write;

use corner_shop_core::Price;
use corner_shop_storefront::render::{CartView, render_count, render_items, render_summary};
use corner_shop_storefront::storage::KeyValueStore;
use corner_shop_storefront::{CartError, CartStore};
use tracing::info;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Add one unit of `name` and show the badge plus the updated cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output cannot be written.
pub fn add<S: KeyValueStore, W: Write>(
    cart: &mut CartStore<S>,
    out: &mut W,
    symbol: &str,
    name: &str,
    price: Price,
) -> CommandResult {
    let result = cart.add_item(name, price.amount());
    info!(product = name, "Add to cart");
    if result.is_ok() && cart.get(name).is_some() {
        writeln!(out, "Added!")?;
    }
    show_after_change(cart, out, symbol, result)
}

/// Remove `name` from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output cannot be written.
pub fn remove<S: KeyValueStore, W: Write>(
    cart: &mut CartStore<S>,
    out: &mut W,
    symbol: &str,
    name: &str,
) -> CommandResult {
    let result = cart.remove_item(name);
    show_after_change(cart, out, symbol, result)
}

/// Set the quantity of `name`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output cannot be written.
pub fn set_quantity<S: KeyValueStore, W: Write>(
    cart: &mut CartStore<S>,
    out: &mut W,
    symbol: &str,
    name: &str,
    quantity: i64,
) -> CommandResult {
    let result = cart.set_quantity(name, quantity);
    show_after_change(cart, out, symbol, result)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output cannot be written.
pub fn clear<S: KeyValueStore, W: Write>(
    cart: &mut CartStore<S>,
    out: &mut W,
    symbol: &str,
) -> CommandResult {
    let result = cart.clear();
    show_after_change(cart, out, symbol, result)
}

/// Render the cart as text, or as the HTML items and badge fragments.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn show<S: KeyValueStore, W: Write>(
    cart: &CartStore<S>,
    out: &mut W,
    symbol: &str,
    html: bool,
) -> CommandResult {
    let view = CartView::build(cart, symbol);
    if html {
        writeln!(out, "{}", render_count(view.item_count)?)?;
        writeln!(out, "{}", render_items(&view)?)?;
    } else {
        writeln!(out, "{}", render_summary(&view)?.trim())?;
    }
    Ok(())
}

/// Print the badge count.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn count<S: KeyValueStore, W: Write>(cart: &CartStore<S>, out: &mut W) -> CommandResult {
    writeln!(out, "{}", cart.count())?;
    Ok(())
}

/// Re-render after a mutation, warning the shopper if it was not saved.
fn show_after_change<S: KeyValueStore, W: Write>(
    cart: &CartStore<S>,
    out: &mut W,
    symbol: &str,
    result: Result<(), CartError>,
) -> CommandResult {
    show(cart, out, symbol, false)?;
    if let Err(e) = result {
        writeln!(
            out,
            "Warning: your cart changed but could not be saved. It will be lost next time."
        )?;
        return Err(e.into());
    }
    Ok(())
}
