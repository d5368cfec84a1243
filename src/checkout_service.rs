use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::catalog::CatalogLoader;
use crate::client::CheckoutClient;
use crate::domain::{AdjustDirection, OrderSummary, Product, ProductRecord};
use crate::error::CheckoutError;
use crate::messages::{CheckoutRequest, ServiceResponse};
use crate::view::{CheckoutView, ProductView};

/// Where the catalog load currently stands.
///
/// Modeled explicitly so the presentation layer can tell "nothing loaded yet"
/// from "load failed" and show a busy indicator while the fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// The checkout state: the product set and everything derived from it.
///
/// Exclusively owned by [`CheckoutService`]; all mutation goes through that
/// service's mailbox, one request at a time.
pub struct CheckoutState {
    products: Vec<Product>,
    status: CatalogStatus,
    summary: OrderSummary,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            status: CatalogStatus::Idle,
            summary: OrderSummary::default(),
        }
    }

    pub fn mark_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    /// A failed load keeps the current product set untouched.
    pub fn mark_failed(&mut self) {
        self.status = CatalogStatus::Failed;
    }

    /// Replace the product set with freshly fetched records, each seeded with
    /// zero ordered quantity and zero total, then recompute the aggregates.
    pub fn install_catalog(&mut self, records: Vec<ProductRecord>) {
        self.products = records.into_iter().map(Product::from_record).collect();
        self.status = CatalogStatus::Loaded;
        self.summary = OrderSummary::compute(&self.products);
    }

    /// Step one product's quantity by one in the given direction.
    ///
    /// Unknown ids and out-of-bounds steps leave the state unchanged and
    /// return `false`. The aggregates are recomputed unconditionally; for a
    /// no-op the result is identical by the invariants, and the uniform path
    /// avoids drift between line totals and the summary.
    pub fn adjust_quantity(&mut self, id: &str, direction: AdjustDirection) -> bool {
        let changed = match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => product.step(direction),
            None => false,
        };
        self.summary = OrderSummary::compute(&self.products);
        changed
    }

    #[cfg(test)]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> CheckoutView {
        CheckoutView {
            is_loading: self.status == CatalogStatus::Loading,
            products: self.products.iter().map(ProductView::from_product).collect(),
            subtotal: self.summary.subtotal,
            discount: (self.summary.discount_amount > rust_decimal::Decimal::ZERO)
                .then_some(self.summary.discount_amount),
            order_total: (!self.products.is_empty()).then_some(self.summary.final_total),
        }
    }
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new()
    }
}

/// Checkout actor owning [`CheckoutState`]. Requests arrive through an mpsc
/// mailbox and are processed one at a time, which serializes every mutation
/// the same way a UI event dispatch loop would.
pub struct CheckoutService<L: CatalogLoader> {
    receiver: mpsc::Receiver<CheckoutRequest>,
    state: CheckoutState,
    loader: L,
}

impl<L: CatalogLoader> CheckoutService<L> {
    pub fn new(buffer_size: usize, loader: L) -> (Self, CheckoutClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            state: CheckoutState::new(),
            loader,
        };
        let client = CheckoutClient::new(sender);
        (service, client)
    }

    /// Main actor loop with tracing
    #[instrument(name = "checkout_service", skip(self))]
    pub async fn run(mut self) {
        info!("CheckoutService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CheckoutRequest::LoadCatalog { respond_to } => {
                    self.handle_load_catalog(respond_to).await;
                }
                CheckoutRequest::AdjustQuantity {
                    id,
                    direction,
                    respond_to,
                } => {
                    self.handle_adjust_quantity(id, direction, respond_to);
                }
                CheckoutRequest::GetView { respond_to } => {
                    self.handle_get_view(respond_to);
                }
                CheckoutRequest::Shutdown => {
                    info!("CheckoutService shutting down");
                    break;
                }
                #[cfg(test)]
                CheckoutRequest::GetProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.product_count()));
                }
            }
        }

        info!("CheckoutService stopped");
    }

    /// The one asynchronous operation: await the catalog source, then either
    /// install the records or log the failure and keep the current set. No
    /// error reaches the caller either way.
    #[instrument(skip(self, respond_to))]
    async fn handle_load_catalog(&mut self, respond_to: ServiceResponse<(), CheckoutError>) {
        debug!("Processing load_catalog request");

        self.state.mark_loading();
        match self.loader.fetch().await {
            Ok(records) => {
                info!(product_count = records.len(), "Catalog loaded");
                self.state.install_catalog(records);
            }
            Err(e) => {
                error!(error = %e, "Catalog load failed, keeping current product set");
                self.state.mark_failed();
            }
        }

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(product_id = %id, direction = ?direction), skip(self, respond_to))]
    fn handle_adjust_quantity(
        &mut self,
        id: String,
        direction: AdjustDirection,
        respond_to: ServiceResponse<CheckoutView, CheckoutError>,
    ) {
        debug!("Processing adjust_quantity request");

        if self.state.adjust_quantity(&id, direction) {
            info!(
                subtotal = %self.state.summary().subtotal,
                final_total = %self.state.summary().final_total,
                "Quantity adjusted"
            );
        } else {
            debug!("Adjustment ignored (unknown product or bound reached)");
        }

        let _ = respond_to.send(Ok(self.state.view()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_view(&self, respond_to: ServiceResponse<CheckoutView, CheckoutError>) {
        debug!("Processing get_view request");

        let _ = respond_to.send(Ok(self.state.view()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn loaded_state(records: Vec<ProductRecord>) -> CheckoutState {
        let mut state = CheckoutState::new();
        state.install_catalog(records);
        state
    }

    #[test]
    fn install_catalog_seeds_zeroed_lines() {
        let state = loaded_state(vec![
            ProductRecord::new("1", "A", 5, dec!(100)),
            ProductRecord::new("2", "B", 3, dec!(50)),
        ]);

        assert_eq!(state.product_count(), 2);
        let view = state.view();
        assert!(view.products.iter().all(|p| p.ordered_quantity == 0));
        assert!(view.products.iter().all(|p| p.total == Decimal::ZERO));
        assert_eq!(view.subtotal, Decimal::ZERO);
        assert_eq!(view.order_total, Some(Decimal::ZERO));
    }

    #[test]
    fn install_catalog_replaces_previous_set() {
        let mut state = loaded_state(vec![ProductRecord::new("1", "A", 5, dec!(100))]);
        state.adjust_quantity("1", AdjustDirection::Increase);

        state.install_catalog(vec![ProductRecord::new("9", "Z", 2, dec!(10))]);
        let view = state.view();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].id, "9");
        assert_eq!(view.subtotal, Decimal::ZERO);
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut state = loaded_state(vec![ProductRecord::new("1", "A", 5, dec!(100))]);
        let before = state.view();

        assert!(!state.adjust_quantity("ghost", AdjustDirection::Increase));
        assert_eq!(state.view(), before);
    }

    #[test]
    fn bounds_hold_under_a_mixed_sequence() {
        let mut state = loaded_state(vec![
            ProductRecord::new("1", "A", 2, dec!(100)),
            ProductRecord::new("2", "B", 4, dec!(25.50)),
        ]);

        let script = [
            ("1", AdjustDirection::Increase),
            ("1", AdjustDirection::Increase),
            ("1", AdjustDirection::Increase), // past the ceiling
            ("2", AdjustDirection::Decrease), // below zero
            ("2", AdjustDirection::Increase),
            ("2", AdjustDirection::Increase),
            ("2", AdjustDirection::Decrease),
        ];
        for (id, direction) in script {
            state.adjust_quantity(id, direction);
        }

        let view = state.view();
        for product in &view.products {
            assert!(product.ordered_quantity <= product.available_count);
        }
        assert_eq!(view.products[0].ordered_quantity, 2);
        assert_eq!(view.products[1].ordered_quantity, 1);
        assert_eq!(view.subtotal, dec!(225.50));
    }

    #[test]
    fn discount_appears_in_view_only_above_threshold() {
        let mut state = loaded_state(vec![ProductRecord::new("1", "A", 20, dec!(100))]);

        for _ in 0..9 {
            state.adjust_quantity("1", AdjustDirection::Increase);
        }
        assert_eq!(state.view().discount, None);

        state.adjust_quantity("1", AdjustDirection::Increase);
        let view = state.view();
        assert_eq!(view.discount, Some(dec!(100.00)));
        assert_eq!(view.order_total, Some(dec!(900.00)));
    }

    #[test]
    fn loading_status_is_reflected_in_view() {
        let mut state = CheckoutState::new();
        assert!(!state.view().is_loading);

        state.mark_loading();
        assert!(state.view().is_loading);

        state.mark_failed();
        let view = state.view();
        assert!(!view.is_loading);
        assert!(view.products.is_empty());
        assert_eq!(view.order_total, None);
    }
}
