use rust_decimal::Decimal;

use super::order::round2;

/// A product as delivered by the catalog source.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub available_count: u32,
    pub price: Decimal,
}

impl ProductRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        available_count: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available_count,
            price,
        }
    }
}

/// Which way a quantity adjustment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    Increase,
    Decrease,
}

/// A checkout line: a catalog product plus its ordered quantity and line total.
///
/// Invariants: `ordered_quantity` stays within `[0, available_count]` and
/// `total` always equals the rounded product of quantity and price.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub available_count: u32,
    pub price: Decimal,
    pub ordered_quantity: u32,
    pub total: Decimal,
}

impl Product {
    /// Seed a fresh checkout line from a catalog record: nothing ordered yet.
    pub fn from_record(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            available_count: record.available_count,
            price: record.price,
            ordered_quantity: 0,
            total: Decimal::ZERO,
        }
    }

    /// Step the ordered quantity by one in the given direction.
    ///
    /// Returns `false` without touching state when the step would leave
    /// `[0, available_count]`. On success the line total is recomputed.
    pub fn step(&mut self, direction: AdjustDirection) -> bool {
        match direction {
            AdjustDirection::Increase => {
                if self.ordered_quantity >= self.available_count {
                    return false;
                }
                self.ordered_quantity += 1;
            }
            AdjustDirection::Decrease => {
                if self.ordered_quantity == 0 {
                    return false;
                }
                self.ordered_quantity -= 1;
            }
        }
        self.total = round2(Decimal::from(self.ordered_quantity) * self.price);
        true
    }

    pub fn can_increment(&self) -> bool {
        self.ordered_quantity < self.available_count
    }

    pub fn can_decrement(&self) -> bool {
        self.ordered_quantity > 0
    }
}
