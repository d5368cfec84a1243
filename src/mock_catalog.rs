//! Test doubles for the catalog contract.
//!
//! # Testing Strategy
//! The catalog fetch is the only seam where the checkout touches the outside
//! world, so tests swap in a loader double instead of mocking channels:
//! [`FixedCatalog`] resolves immediately with a known record list,
//! [`FailingCatalog`] fails with a chosen error shape.

use std::future::Future;

use rust_decimal::Decimal;

use crate::catalog::CatalogLoader;
use crate::domain::ProductRecord;
use crate::error::CatalogError;

/// Shorthand for building catalog fixtures.
pub fn record(id: &str, name: &str, available_count: u32, price: Decimal) -> ProductRecord {
    ProductRecord::new(id, name, available_count, price)
}

/// Catalog that resolves immediately with a fixed record list.
#[derive(Debug, Clone)]
pub struct FixedCatalog {
    records: Vec<ProductRecord>,
}

impl FixedCatalog {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }
}

impl CatalogLoader for FixedCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<ProductRecord>, CatalogError>> + Send {
        let records = self.records.clone();
        async move { Ok(records) }
    }
}

/// Catalog that always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingCatalog {
    error: CatalogError,
}

impl FailingCatalog {
    pub fn transport() -> Self {
        Self {
            error: CatalogError::Transport("connection refused".to_string()),
        }
    }

    pub fn parse() -> Self {
        Self {
            error: CatalogError::Parse("malformed product list".to_string()),
        }
    }
}

impl CatalogLoader for FailingCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<ProductRecord>, CatalogError>> + Send {
        let error = self.error.clone();
        async move { Err(error) }
    }
}
