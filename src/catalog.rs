use std::future::Future;
use std::time::Duration;

use rust_decimal_macros::dec;

use crate::domain::ProductRecord;
use crate::error::CatalogError;

/// Source of the product catalog.
///
/// A single asynchronous fetch, taking no arguments and returning the ordered
/// product list or a transport/parse failure. The checkout treats every
/// failure uniformly: log it and carry on with the current (typically empty)
/// product set.
pub trait CatalogLoader: Send + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<ProductRecord>, CatalogError>> + Send;
}

/// Fixed in-memory catalog standing in for a remote product service.
///
/// The simulated latency keeps the loading state observable.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<ProductRecord>,
    latency: Duration,
}

impl StaticCatalog {
    pub fn new(records: Vec<ProductRecord>, latency: Duration) -> Self {
        Self { records, latency }
    }

    /// The Electro World storefront assortment used by the demo.
    pub fn electro_world() -> Self {
        Self::new(
            vec![
                ProductRecord::new("1", "Wireless Headphones", 8, dec!(249.99)),
                ProductRecord::new("2", "Mechanical Keyboard", 12, dec!(89.50)),
                ProductRecord::new("3", "27\" 4K Monitor", 5, dec!(399.00)),
                ProductRecord::new("4", "USB-C Hub", 30, dec!(34.95)),
                ProductRecord::new("5", "Bluetooth Speaker", 10, dec!(59.99)),
            ],
            Duration::from_millis(150),
        )
    }
}

impl CatalogLoader for StaticCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<ProductRecord>, CatalogError>> + Send {
        let records = self.records.clone();
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            Ok(records)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_preserves_record_order() {
        let catalog = StaticCatalog::new(
            vec![
                ProductRecord::new("a", "First", 1, dec!(1.00)),
                ProductRecord::new("b", "Second", 2, dec!(2.00)),
            ],
            Duration::ZERO,
        );

        let records = catalog.fetch().await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
