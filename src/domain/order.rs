use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::product::Product;

/// Subtotal at or above this value (inclusive) qualifies for the order discount.
pub const DISCOUNT_THRESHOLD: Decimal = dec!(1000);

/// Discount rate applied once the threshold is reached.
pub const DISCOUNT_RATE: Decimal = dec!(0.10);

/// Round a monetary value to 2 decimal places, half-up.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Order-level aggregates derived from the full product set.
///
/// Never stored independently of a recomputation; whenever the product set
/// changes, a fresh summary is computed from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub final_total: Decimal,
}

impl OrderSummary {
    /// Recompute the aggregates from the full product set.
    ///
    /// The subtotal is the raw sum of line totals; the discount is taken off
    /// that raw sum and only the derived values are rounded.
    pub fn compute(products: &[Product]) -> Self {
        let subtotal: Decimal = products.iter().map(|p| p.total).sum();
        if subtotal >= DISCOUNT_THRESHOLD {
            let discount_amount = round2(subtotal * DISCOUNT_RATE);
            Self {
                subtotal,
                discount_amount,
                final_total: round2(subtotal - discount_amount),
            }
        } else {
            Self {
                subtotal,
                discount_amount: Decimal::ZERO,
                final_total: round2(subtotal),
            }
        }
    }
}
