//! Interactive checkout.

use std::io::{BufRead, Write};

use corner_shop_storefront::CartStore;
use corner_shop_storefront::checkout::{CheckoutOutcome, CheckoutSummary, checkout};
use corner_shop_storefront::storage::KeyValueStore;

/// Run checkout, asking on `input` unless `assume_yes` is set.
///
/// Anything other than `y` or `yes` (any case) declines. End of input
/// declines too.
///
/// # Errors
///
/// Returns an error if the cleared cart cannot be saved or I/O fails.
pub fn run<S, W, R>(
    cart: &mut CartStore<S>,
    out: &mut W,
    input: &mut R,
    symbol: &str,
    assume_yes: bool,
) -> Result<CheckoutOutcome, Box<dyn std::error::Error>>
where
    S: KeyValueStore,
    W: Write,
    R: BufRead,
{
    let mut prompt_error = None;
    let outcome = checkout(cart, |summary| {
        if assume_yes {
            return true;
        }
        match ask(out, input, summary, symbol) {
            Ok(answer) => answer,
            Err(e) => {
                prompt_error = Some(e);
                false
            }
        }
    })?;

    if let Some(e) = prompt_error {
        return Err(e.into());
    }

    match outcome.message() {
        Some(message) => writeln!(out, "{message}")?,
        None => writeln!(out, "Checkout cancelled.")?,
    }
    Ok(outcome)
}

fn ask<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    summary: &CheckoutSummary,
    symbol: &str,
) -> std::io::Result<bool> {
    write!(out, "{}\n\nConfirm? [y/N] ", summary.prompt(symbol))?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use corner_shop_storefront::checkout::{EMPTY_CART_MESSAGE, THANK_YOU_MESSAGE};
    use corner_shop_storefront::storage::MemoryStore;
    use rust_decimal::Decimal;

    use super::*;

    fn cart_with_mug() -> CartStore<MemoryStore> {
        let mut cart = CartStore::open(MemoryStore::new());
        cart.add_item("Mug", Decimal::new(8, 0)).unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_message() {
        let mut cart = CartStore::open(MemoryStore::new());
        let mut out = Vec::new();
        let mut input: &[u8] = b"y\n";

        let outcome = run(&mut cart, &mut out, &mut input, "R", false).unwrap();

        assert_eq!(outcome, CheckoutOutcome::Empty);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim(), EMPTY_CART_MESSAGE);
    }

    #[test]
    fn test_confirmed_via_prompt() {
        let mut cart = cart_with_mug();
        let mut out = Vec::new();
        let mut input: &[u8] = b"Yes\n";

        let outcome = run(&mut cart, &mut out, &mut input, "R", false).unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Completed(_)));
        assert!(cart.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total: R8.00"));
        assert!(text.contains(THANK_YOU_MESSAGE));
    }

    #[test]
    fn test_declined_via_prompt() {
        let mut cart = cart_with_mug();
        let mut out = Vec::new();
        let mut input: &[u8] = b"n\n";

        let outcome = run(&mut cart, &mut out, &mut input, "R", false).unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Declined(_)));
        assert_eq!(cart.count(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Checkout cancelled."));
    }

    #[test]
    fn test_end_of_input_declines() {
        let mut cart = cart_with_mug();
        let mut out = Vec::new();
        let mut input: &[u8] = b"";

        let outcome = run(&mut cart, &mut out, &mut input, "R", false).unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Declined(_)));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut cart = cart_with_mug();
        let mut out = Vec::new();
        let mut input: &[u8] = b"n\n";

        let outcome = run(&mut cart, &mut out, &mut input, "R", true).unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Completed(_)));
        assert!(!String::from_utf8(out).unwrap().contains("Confirm?"));
    }
}
