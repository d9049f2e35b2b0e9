//! Cart view models and templates.
//!
//! Rendering never touches the store's state: [`CartView::build`] reads the
//! items, total and count once and everything below works from that snapshot.
//! The UI layer calls it again after every mutation.

use askama::Template;
use corner_shop_core::{LineItem, format_money};

use crate::cart::CartStore;
use crate::error::RenderError;
use crate::storage::KeyValueStore;

/// Placeholder shown instead of line items when the cart is empty.
pub const EMPTY_CART_PLACEHOLDER: &str = "Your cart is empty";

/// Display data for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    /// Quantity the "-" control asks for; zero removes the line.
    pub quantity_down: u64,
    /// Quantity the "+" control asks for.
    pub quantity_up: u64,
    pub unit_price: String,
    pub line_price: String,
}

/// Display data for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Snapshot the store for display, formatting money with `symbol`.
    #[must_use]
    pub fn build<S: KeyValueStore>(cart: &CartStore<S>, symbol: &str) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView::new(item, symbol))
                .collect(),
            total: format_money(cart.total(), symbol),
            item_count: cart.count(),
        }
    }

    /// An empty cart.
    #[must_use]
    pub fn empty(symbol: &str) -> Self {
        Self {
            items: Vec::new(),
            total: format_money(rust_decimal::Decimal::ZERO, symbol),
            item_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    fn new(item: &LineItem, symbol: &str) -> Self {
        let quantity = item.quantity();
        Self {
            name: item.name().to_string(),
            quantity,
            quantity_down: u64::from(quantity) - 1,
            quantity_up: u64::from(quantity) + 1,
            unit_price: format_money(item.unit_price().amount(), symbol),
            line_price: format_money(item.subtotal(), symbol),
        }
    }
}

/// Cart items fragment, including the grand total.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div id="cart-items">
{%- if cart.items.is_empty() %}
  <p class="cart-empty">{{ placeholder }}</p>
{%- else %}
{%- for item in cart.items %}
  <div class="cart-item" data-product="{{ item.name }}">
    <div class="cart-item-info">
      <h4>{{ item.name }}</h4>
      <button class="cart-qty" data-product="{{ item.name }}" data-quantity="{{ item.quantity_down }}">-</button>
      <span class="cart-item-quantity">Qty: {{ item.quantity }}</span>
      <button class="cart-qty" data-product="{{ item.name }}" data-quantity="{{ item.quantity_up }}">+</button>
    </div>
    <div class="cart-item-price">{{ item.line_price }}</div>
    <button class="cart-remove" data-product="{{ item.name }}">Remove</button>
  </div>
{%- endfor %}
{%- endif %}
</div>
<div id="cart-total">{{ cart.total }}</div>"#
)]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
    pub placeholder: &'static str,
}

/// Cart count badge fragment.
#[derive(Template)]
#[template(ext = "html", source = r#"<span id="cart-count">{{ count }}</span>"#)]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Plain-text summary for terminals and logs.
#[derive(Template)]
#[template(
    ext = "txt",
    source = r"{% if cart.items.is_empty() %}{{ placeholder }}
{% else %}{% for item in cart.items %}{{ item.name }} x{{ item.quantity }} @ {{ item.unit_price }} = {{ item.line_price }}
{% endfor %}{% endif %}Items: {{ cart.item_count }}
Total: {{ cart.total }}"
)]
pub struct CartSummaryTemplate<'a> {
    pub cart: &'a CartView,
    pub placeholder: &'static str,
}

/// Render the cart items fragment.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn render_items(cart: &CartView) -> Result<String, RenderError> {
    Ok(CartItemsTemplate {
        cart,
        placeholder: EMPTY_CART_PLACEHOLDER,
    }
    .render()?)
}

/// Render the badge fragment.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn render_count(count: u64) -> Result<String, RenderError> {
    Ok(CartCountTemplate { count }.render()?)
}

/// Render the plain-text summary.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn render_summary(cart: &CartView) -> Result<String, RenderError> {
    Ok(CartSummaryTemplate {
        cart,
        placeholder: EMPTY_CART_PLACEHOLDER,
    }
    .render()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::storage::MemoryStore;

    fn sample_cart() -> CartStore<MemoryStore> {
        let mut cart = CartStore::open(MemoryStore::new());
        cart.add_item("Widget", Decimal::new(1999, 2)).unwrap();
        cart.add_item("Widget", Decimal::new(1999, 2)).unwrap();
        cart.add_item("Mug", Decimal::new(8, 0)).unwrap();
        cart
    }

    #[test]
    fn test_build_view() {
        let view = CartView::build(&sample_cart(), "R");

        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "R47.98");
        assert_eq!(
            view.items.first().unwrap(),
            &CartItemView {
                name: "Widget".to_string(),
                quantity: 2,
                quantity_down: 1,
                quantity_up: 3,
                unit_price: "R19.99".to_string(),
                line_price: "R39.98".to_string(),
            }
        );
    }

    #[test]
    fn test_build_does_not_touch_store() {
        let cart = sample_cart();
        let before = cart.items().to_vec();
        let _ = CartView::build(&cart, "R");
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::build(&CartStore::open(MemoryStore::new()), "R");
        assert_eq!(view, CartView::empty("R"));
        assert_eq!(view.total, "R0.00");
    }

    #[test]
    fn test_render_items() {
        let html = render_items(&CartView::build(&sample_cart(), "R")).unwrap();

        assert!(html.contains("<h4>Widget</h4>"));
        assert!(html.contains("Qty: 2"));
        assert!(html.contains("R39.98"));
        assert!(html.contains("<h4>Mug</h4>"));
        assert!(html.contains(r#"<div id="cart-total">R47.98</div>"#));
        assert!(!html.contains(EMPTY_CART_PLACEHOLDER));
        assert!(html.find("Widget").unwrap() < html.find("Mug").unwrap());
    }

    #[test]
    fn test_render_items_empty() {
        let html = render_items(&CartView::empty("R")).unwrap();
        assert!(html.contains(EMPTY_CART_PLACEHOLDER));
        assert!(html.contains("R0.00"));
        assert!(!html.contains("cart-item-price"));
    }

    #[test]
    fn test_render_items_escapes_names() {
        let mut cart = CartStore::open(MemoryStore::new());
        cart.add_item("<script>alert(1)</script>", Decimal::ONE)
            .unwrap();
        let html = render_items(&CartView::build(&cart, "R")).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_count() {
        assert_eq!(
            render_count(5).unwrap(),
            r#"<span id="cart-count">5</span>"#
        );
    }

    #[test]
    fn test_render_summary() {
        let text = render_summary(&CartView::build(&sample_cart(), "R")).unwrap();
        assert!(text.contains("Widget x2 @ R19.99 = R39.98"));
        assert!(text.contains("Mug x1 @ R8.00 = R8.00"));
        assert!(text.contains("Items: 3"));
        assert!(text.ends_with("Total: R47.98"));
    }

    #[test]
    fn test_render_summary_empty() {
        let text = render_summary(&CartView::empty("$")).unwrap();
        assert!(text.starts_with(EMPTY_CART_PLACEHOLDER));
        assert!(text.contains("Items: 0"));
        assert!(text.ends_with("Total: $0.00"));
    }
}
