mod app_system;
mod catalog;
mod checkout_service;
mod client;
mod domain;
mod error;
mod messages;
mod view;

#[cfg(test)]
mod mock_catalog;

use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, CheckoutSystem};
use crate::catalog::StaticCatalog;
use crate::client::CheckoutClient;
use crate::domain::AdjustDirection;
use crate::error::CheckoutError;
use crate::view::{format_money, CheckoutView};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting Electro World checkout");

    let system = CheckoutSystem::new(StaticCatalog::electro_world());
    let client = system.checkout_client.clone();

    let span = tracing::info_span!("catalog_load");
    async {
        info!("Fetching product catalog");
        client.load_catalog().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("order_session");
    let view = scripted_session(&client)
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    render(&view);

    system.shutdown().await?;

    info!("Checkout session complete");
    Ok(())
}

/// Stand-in for a user clicking the +/- controls: two monitors, three
/// keyboards and one mistaken extra that gets removed again. The fourth
/// keyboard pushes the subtotal past the discount threshold.
async fn scripted_session(client: &CheckoutClient) -> Result<CheckoutView, CheckoutError> {
    info!("Adjusting order quantities");

    for _ in 0..2 {
        client
            .adjust_quantity("3".to_string(), AdjustDirection::Increase)
            .await?;
    }
    for _ in 0..4 {
        client
            .adjust_quantity("2".to_string(), AdjustDirection::Increase)
            .await?;
    }
    client
        .adjust_quantity("2".to_string(), AdjustDirection::Decrease)
        .await?;

    // Unknown product id: ignored by the service, visible at debug level.
    client
        .adjust_quantity("99".to_string(), AdjustDirection::Increase)
        .await?;

    client.get_view().await
}

/// Text rendition of the checkout table and order summary.
fn render(view: &CheckoutView) {
    if view.is_loading {
        println!("Loading...");
        return;
    }

    println!();
    println!("Electro World");
    println!(
        "{:<4} {:<22} {:>9} {:>10} {:>8} {:>10}",
        "ID", "Product Name", "Available", "Price", "Quantity", "Total"
    );
    for product in &view.products {
        println!(
            "{:<4} {:<22} {:>9} {:>10} {:>8} {:>10}",
            product.id,
            product.name,
            product.available_count,
            format!("${}", format_money(product.price)),
            product.ordered_quantity,
            format!("${}", format_money(product.total)),
        );
    }

    println!();
    println!("Order summary");
    if let Some(discount) = view.discount {
        println!("Discount: ${}", format_money(discount));
    }
    if let Some(total) = view.order_total {
        println!("Total: ${}", format_money(total));
    }
}
