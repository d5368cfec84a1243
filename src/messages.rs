use tokio::sync::oneshot;

use crate::domain::AdjustDirection;
use crate::error::CheckoutError;
use crate::view::CheckoutView;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enum for checkout communication. Each variant includes
/// parameters and a oneshot channel for responses.
#[derive(Debug)]
pub enum CheckoutRequest {
    /// Fetch the catalog and replace the product set. Load failures are
    /// handled inside the service; the response only signals completion.
    LoadCatalog {
        respond_to: ServiceResponse<(), CheckoutError>,
    },
    /// Step one product's ordered quantity by one within bounds. Out-of-range
    /// steps and unknown ids are silent no-ops; the post-mutation view is
    /// returned either way.
    AdjustQuantity {
        id: String,
        direction: AdjustDirection,
        respond_to: ServiceResponse<CheckoutView, CheckoutError>,
    },
    GetView {
        respond_to: ServiceResponse<CheckoutView, CheckoutError>,
    },
    Shutdown,
    #[cfg(test)]
    GetProductCount {
        respond_to: ServiceResponse<usize, CheckoutError>,
    },
}
