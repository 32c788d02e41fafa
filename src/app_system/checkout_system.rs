use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument};

use crate::clients::{BasketClient, DialogClient, Navigator, OrderClient, UserClient};
use crate::events::{BasketBadge, CheckoutEvent};
use crate::services::{BasketService, OrderService, UserService};
use crate::shell::{DialogHost, NavigationHost};

const CHANNEL_BUFFER: usize = 32;

/// The application system: starts every collaborator actor, wires the
/// clients together, and handles shutdown.
pub struct CheckoutSystem {
    pub basket_client: BasketClient,
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub navigator: Navigator,
    pub dialog: DialogClient,
    /// Sender handed to each checkout flow for publishing checkout events.
    pub events: mpsc::Sender<CheckoutEvent>,
    /// Live badge count, reset to zero whenever an order goes through.
    pub badge_count: watch::Receiver<u32>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CheckoutSystem {
    /// Create and start the entire system. Collaborators have no
    /// dependencies on each other, so startup order is arbitrary.
    #[instrument(name = "checkout_system")]
    pub fn new(initial_badge_count: u32) -> Self {
        let mut handles = Vec::new();

        info!("Starting checkout system");

        let (basket_service, basket_client) = BasketService::new(CHANNEL_BUFFER);
        handles.push(tokio::spawn(basket_service.run()));

        let (order_service, order_client) = OrderService::new(CHANNEL_BUFFER);
        handles.push(tokio::spawn(order_service.run()));

        let (user_service, user_client) = UserService::new(CHANNEL_BUFFER);
        handles.push(tokio::spawn(user_service.run()));

        let (navigation_host, navigator) = NavigationHost::new(CHANNEL_BUFFER);
        handles.push(tokio::spawn(navigation_host.run()));

        let (dialog_host, dialog) = DialogHost::new(CHANNEL_BUFFER);
        handles.push(tokio::spawn(dialog_host.run()));

        let (badge, events, badge_count) = BasketBadge::new(CHANNEL_BUFFER, initial_badge_count);
        handles.push(tokio::spawn(badge.run()));

        info!("Checkout system started successfully");

        Self {
            basket_client,
            order_client,
            user_client,
            navigator,
            dialog,
            events,
            badge_count,
            handles,
        }
    }

    /// Gracefully shutdown the entire system: signal every actor, then wait
    /// for all tasks. Join errors are logged but do not abort the shutdown.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down checkout system");

        let _ = self.basket_client.shutdown().await;
        let _ = self.order_client.shutdown().await;
        let _ = self.user_client.shutdown().await;
        let _ = self.navigator.shutdown().await;
        let _ = self.dialog.shutdown().await;
        // The badge stops when its event channel closes.
        drop(self.events);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Checkout system shutdown complete");
        Ok(())
    }
}
