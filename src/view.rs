use rust_decimal::Decimal;

use crate::domain::Product;

/// Format a monetary value with exactly 2 decimal places.
pub fn format_money(value: Decimal) -> String {
    format!("{value:.2}")
}

/// One table row of the checkout, with its action affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub available_count: u32,
    pub price: Decimal,
    pub ordered_quantity: u32,
    pub total: Decimal,
    /// Enabled iff `ordered_quantity < available_count`.
    pub can_increment: bool,
    /// Enabled iff `ordered_quantity > 0`.
    pub can_decrement: bool,
}

impl ProductView {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            available_count: product.available_count,
            price: product.price,
            ordered_quantity: product.ordered_quantity,
            total: product.total,
            can_increment: product.can_increment(),
            can_decrement: product.can_decrement(),
        }
    }
}

/// Immutable snapshot handed to the presentation layer after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    /// True while the catalog fetch is in flight (busy indicator).
    pub is_loading: bool,
    /// Rows in catalog order.
    pub products: Vec<ProductView>,
    pub subtotal: Decimal,
    /// Present only when a discount applies (discount banner).
    pub discount: Option<Decimal>,
    /// Present once at least one product is loaded.
    pub order_total: Option<Decimal>,
}
