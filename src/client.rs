use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::error::CheckoutError;
use crate::messages::CheckoutRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, CheckoutError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| CheckoutError::ActorCommunicationError("Service closed".to_string()))?;

                response.await.map_err(|_| CheckoutError::ActorCommunicationError("Service dropped".to_string()))?
            }
        }
    };
}

/// Handle for talking to the [`CheckoutService`](crate::checkout_service::CheckoutService).
/// Thin wrapper around the message channel with macro-generated methods.
#[derive(Clone)]
pub struct CheckoutClient {
    sender: mpsc::Sender<CheckoutRequest>,
}

impl CheckoutClient {
    pub fn new(sender: mpsc::Sender<CheckoutRequest>) -> Self {
        Self { sender }
    }

    /// Manual method for the one request that carries no response channel.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CheckoutError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CheckoutRequest::Shutdown)
            .await
            .map_err(|_| CheckoutError::ActorCommunicationError("Service closed".to_string()))?;
        Ok(())
    }
}

client_method!(CheckoutClient => fn load_catalog() -> () as CheckoutRequest::LoadCatalog);
client_method!(CheckoutClient => fn adjust_quantity(id: String, direction: crate::domain::AdjustDirection) -> crate::view::CheckoutView as CheckoutRequest::AdjustQuantity);
client_method!(CheckoutClient => fn get_view() -> crate::view::CheckoutView as CheckoutRequest::GetView);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(CheckoutClient => fn get_product_count() -> usize as CheckoutRequest::GetProductCount);
