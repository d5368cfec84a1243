use tracing::{error, info, instrument};

use crate::catalog::CatalogLoader;
use crate::checkout_service::CheckoutService;
use crate::client::CheckoutClient;

/// Coordinator for the checkout service lifecycle.
///
/// Responsible for starting the service, handing out the client, and waiting
/// for the service task on shutdown.
pub struct CheckoutSystem {
    pub checkout_client: CheckoutClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CheckoutSystem {
    /// Create and start the checkout system with the given catalog source.
    #[instrument(name = "checkout_system", skip(loader))]
    pub fn new<L: CatalogLoader>(loader: L) -> Self {
        info!("Starting checkout system");

        let (service, checkout_client) = CheckoutService::new(100, loader);
        let handle = tokio::spawn(service.run());

        info!("Checkout system started successfully");

        Self {
            checkout_client,
            handle,
        }
    }

    /// Gracefully shut down and wait for the service task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down checkout system");

        let _ = self.checkout_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Service task failed: {:?}", e));
        }

        info!("Checkout system shutdown complete");
        Ok(())
    }
}
