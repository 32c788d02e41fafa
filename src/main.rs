use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{info, Instrument};

use checkout_flow::app_system::{setup_tracing, CheckoutSystem};
use checkout_flow::domain::{BasketItem, UserProfile};
use checkout_flow::settings::Settings;
use checkout_flow::CheckoutFlow;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with complete checkout system");

    // Start all collaborator actors; the badge starts at the basket size
    let system = CheckoutSystem::new(2);

    // Seed a basket and a profile the way the surrounding app would have
    let items = vec![
        BasketItem::new("p1", "Widget", "widget.png", 2, Decimal::new(500, 2)),
        BasketItem::new("p2", "Gadget", "gadget.png", 1, Decimal::new(1250, 2)),
    ];
    system
        .basket_client
        .set_local_items(items)
        .await
        .map_err(|e| e.to_string())?;

    let profile = UserProfile {
        user_id: "6f9619ff-8b86-4011-b42d-00c04fc964ff".to_string(),
        street: "1 Main St".to_string(),
        zip_code: "98101".to_string(),
        state: "WA".to_string(),
        country: "USA".to_string(),
        address: "Seattle".to_string(),
        card_number: "4111111111111111".to_string(),
        card_holder: "Alice Smith".to_string(),
        card_security_number: "123".to_string(),
    };
    system
        .user_client
        .set_profile(profile)
        .await
        .map_err(|e| e.to_string())?;

    // Build the checkout flow against the running system. Mock mode on, so
    // order persistence happens client-side.
    let settings = Settings::new("demo-token", true);
    let (flow, view_state) = CheckoutFlow::new(
        settings,
        system.basket_client.clone(),
        system.order_client.clone(),
        system.user_client.clone(),
        system.navigator.clone(),
        system.dialog.clone(),
        system.events.clone(),
    );

    let span = tracing::info_span!("checkout_screen");
    async {
        info!("Initializing checkout screen");
        flow.initialize(&HashMap::new())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    if let Some(order) = view_state.order.borrow().clone() {
        info!(
            total = %order.total,
            item_count = order.order_items.len(),
            order_number = ?order.order_number,
            "Draft order ready"
        );
    }

    // Watch the badge before submitting so the reset is observable
    let mut badge_count = system.badge_count.clone();

    let span = tracing::info_span!("checkout_submission");
    async {
        info!("Submitting order");
        flow.checkout().await;
    }
    .instrument(span)
    .await;

    // The badge owner reacts to the published checkout event
    if badge_count.changed().await.is_ok() {
        info!(badge_count = *badge_count.borrow(), "Basket badge updated");
    }

    // Drop the flow so its event sender closes before shutdown
    drop(flow);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
