use std::collections::HashMap;

use chrono::{Months, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::clients::{BasketClient, DialogClient, Navigator, OrderClient, UserClient};
use crate::domain::{
    build_order_items, compute_total, Address, BasketCheckout, BasketItem, CardType, Order,
    OrderStatus, PaymentInfo,
};
use crate::error::CheckoutError;
use crate::events::CheckoutEvent;
use crate::settings::Settings;
use crate::shell::CATALOG_ROUTE;

pub const SUCCESS_MESSAGE: &str = "Order sent successfully!";
pub const SUCCESS_TITLE: &str = "Checkout";
pub const FAILURE_MESSAGE: &str = "An error occurred. Please, try again.";
pub const FAILURE_TITLE: &str = "Oops!";
const CONFIRM_LABEL: &str = "Ok";

/// Presentation-bound state of the checkout screen. The view holds the
/// receivers; the flow publishes replacements wholesale on each change.
pub struct CheckoutViewState {
    pub order_items: watch::Receiver<Vec<BasketItem>>,
    pub order: watch::Receiver<Option<Order>>,
    pub shipping_address: watch::Receiver<Option<Address>>,
    pub busy: watch::Receiver<bool>,
}

/// Orchestrates the transition from "items in basket" to "order submitted".
///
/// Collaborators are injected at construction and held for the component's
/// lifetime. `initialize` gathers basket + profile into a draft order;
/// `checkout` submits it and either navigates away or shows a single generic
/// failure alert.
pub struct CheckoutFlow {
    settings: Settings,
    basket: BasketClient,
    orders: OrderClient,
    users: UserClient,
    navigator: Navigator,
    dialog: DialogClient,
    events: mpsc::Sender<CheckoutEvent>,

    order_items: watch::Sender<Vec<BasketItem>>,
    order: watch::Sender<Option<Order>>,
    shipping_address: watch::Sender<Option<Address>>,
    busy: watch::Sender<bool>,
}

impl CheckoutFlow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: Settings,
        basket: BasketClient,
        orders: OrderClient,
        users: UserClient,
        navigator: Navigator,
        dialog: DialogClient,
        events: mpsc::Sender<CheckoutEvent>,
    ) -> (Self, CheckoutViewState) {
        let (order_items, order_items_rx) = watch::channel(Vec::new());
        let (order, order_rx) = watch::channel(None);
        let (shipping_address, shipping_address_rx) = watch::channel(None);
        let (busy, busy_rx) = watch::channel(false);

        let flow = Self {
            settings,
            basket,
            orders,
            users,
            navigator,
            dialog,
            events,
            order_items,
            order,
            shipping_address,
            busy,
        };
        let view_state = CheckoutViewState {
            order_items: order_items_rx,
            order: order_rx,
            shipping_address: shipping_address_rx,
            busy: busy_rx,
        };
        (flow, view_state)
    }

    /// Builds the shipping address and draft order from the current basket
    /// and profile, and publishes them to the view.
    ///
    /// `_query` is the screen's navigation parameters; this screen takes
    /// none, the parameter exists for interface conformance.
    ///
    /// Errors are not handled here; they propagate to whatever drove the
    /// initialization. On error the busy flag stays set.
    #[instrument(skip(self, _query))]
    pub async fn initialize(
        &self,
        _query: &HashMap<String, String>,
    ) -> Result<(), CheckoutError> {
        info!("Initializing checkout");
        self.busy.send_replace(true);

        let basket_items = self.basket.local_items().await?;
        self.order_items.send_replace(basket_items.clone());

        let auth_token = self.settings.auth_token();
        let profile = self.users.get_profile(auth_token.clone()).await?;

        // An absent profile leaves every copied field empty instead of
        // failing the screen.
        let buyer_id = match profile.as_ref().map(|p| p.user_id.as_str()) {
            Some(user_id) if !user_id.is_empty() => Uuid::parse_str(user_id)?,
            _ => Uuid::new_v4(),
        };
        let profile = profile.unwrap_or_default();

        let shipping_address = Address {
            id: buyer_id,
            street: profile.street.clone(),
            zip_code: profile.zip_code.clone(),
            state: profile.state.clone(),
            country: profile.country.clone(),
            // The profile's free-form address line stands in for the city.
            city: profile.address.clone(),
        };
        self.shipping_address
            .send_replace(Some(shipping_address.clone()));

        // Card type is always MasterCard here, whatever the profile stores.
        let payment_info = PaymentInfo {
            card_number: profile.card_number.clone(),
            card_holder_name: profile.card_holder.clone(),
            card_type: CardType::master_card(),
            security_number: profile.card_security_number.clone(),
        };

        let order_items = build_order_items(&basket_items);
        let total = compute_total(&order_items);
        let now = Utc::now();

        let mut order = Order {
            buyer_id: profile.user_id.clone(),
            order_number: None,
            order_items,
            status: OrderStatus::Submitted,
            order_date: now,
            card_holder_name: payment_info.card_holder_name,
            card_number: payment_info.card_number,
            card_security_number: payment_info.security_number,
            // Expiration is not read from the profile; drafts always carry
            // a date five years out.
            card_expiration: now + Months::new(60),
            card_type_id: payment_info.card_type.id,
            shipping_street: shipping_address.street,
            shipping_city: shipping_address.city,
            shipping_state: shipping_address.state,
            shipping_country: shipping_address.country,
            shipping_zip_code: shipping_address.zip_code,
            total,
        };

        if self.settings.use_mock_mode() {
            // Simulated backend: number the draft as history count + 1.
            // Placeholder scheme, not collision-safe with concurrent writers.
            let orders = self.orders.list_orders(auth_token).await?;
            order.order_number = Some(orders.len() as u32 + 1);
        }

        info!(total = %order.total, item_count = order.order_items.len(), "Draft order built");
        self.order.send_replace(Some(order));

        self.busy.send_replace(false);
        Ok(())
    }

    /// The checkout command. Never surfaces an error to the caller: any
    /// failure along the way collapses into one generic alert.
    #[instrument(skip(self))]
    pub async fn checkout(&self) {
        if let Err(error) = self.submit_order().await {
            warn!(%error, "Checkout failed");
            let _ = self
                .dialog
                .show_alert(
                    FAILURE_MESSAGE.to_string(),
                    FAILURE_TITLE.to_string(),
                    CONFIRM_LABEL.to_string(),
                )
                .await;
        }
    }

    async fn submit_order(&self) -> Result<(), CheckoutError> {
        let auth_token = self.settings.auth_token();

        let order = self
            .order
            .borrow()
            .clone()
            .ok_or(CheckoutError::MissingDraft("no draft order"))?;
        let shipping_address = self
            .shipping_address
            .borrow()
            .clone()
            .ok_or(CheckoutError::MissingDraft("no shipping address"))?;

        let mut submission = BasketCheckout::from_order(&order);
        submission.request_id = Uuid::new_v4();

        debug!(request_id = %submission.request_id, "Submitting checkout");
        self.basket
            .checkout(submission, auth_token.clone())
            .await?;

        if self.settings.use_mock_mode() {
            // Without a real backend reacting to the checkout event, persist
            // the order explicitly.
            self.orders.create_order(order, auth_token.clone()).await?;
        }

        self.basket
            .clear_basket(shipping_address.id.to_string(), auth_token)
            .await?;

        if self.events.send(CheckoutEvent::OrderSubmitted).await.is_err() {
            debug!("No subscriber for checkout events");
        }

        self.navigator.navigate_to(CATALOG_ROUTE.to_string()).await?;

        self.dialog
            .show_alert(
                SUCCESS_MESSAGE.to_string(),
                SUCCESS_TITLE.to_string(),
                CONFIRM_LABEL.to_string(),
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::domain::UserProfile;
    use crate::events::BasketBadge;
    use crate::services::{BasketService, OrderService, UserService};
    use crate::shell::{DialogHost, NavigationHost};

    struct Harness {
        flow: CheckoutFlow,
        view_state: CheckoutViewState,
        basket: BasketClient,
        users: UserClient,
    }

    fn start_flow(settings: Settings) -> Harness {
        let (basket_service, basket) = BasketService::new(10);
        tokio::spawn(basket_service.run());
        let (order_service, orders) = OrderService::new(10);
        tokio::spawn(order_service.run());
        let (user_service, users) = UserService::new(10);
        tokio::spawn(user_service.run());
        let (navigation_host, navigator) = NavigationHost::new(10);
        tokio::spawn(navigation_host.run());
        let (dialog_host, dialog) = DialogHost::new(10);
        tokio::spawn(dialog_host.run());
        let (badge, events, _badge_count) = BasketBadge::new(10, 0);
        tokio::spawn(badge.run());

        let (flow, view_state) = CheckoutFlow::new(
            settings,
            basket.clone(),
            orders,
            users.clone(),
            navigator,
            dialog,
            events,
        );
        Harness {
            flow,
            view_state,
            basket,
            users,
        }
    }

    fn widget_basket() -> Vec<BasketItem> {
        vec![
            BasketItem::new("p1", "Widget", "widget.png", 2, Decimal::new(500, 2)),
            BasketItem::new("p2", "", "mystery.png", 1, Decimal::new(100, 2)),
        ]
    }

    #[tokio::test]
    async fn initialize_parses_the_profile_id_into_the_address() {
        let harness = start_flow(Settings::new("token", false));
        let profile = UserProfile {
            user_id: "6f9619ff-8b86-4011-b42d-00c04fc964ff".to_string(),
            street: "1 Main St".to_string(),
            address: "Seattle".to_string(),
            ..UserProfile::default()
        };
        harness.users.set_profile(profile).await.unwrap();

        harness.flow.initialize(&HashMap::new()).await.unwrap();

        let address = harness
            .view_state
            .shipping_address
            .borrow()
            .clone()
            .unwrap();
        assert_eq!(
            address.id,
            Uuid::parse_str("6f9619ff-8b86-4011-b42d-00c04fc964ff").unwrap()
        );
        assert_eq!(address.street, "1 Main St");
        // The profile's address line lands in the city field.
        assert_eq!(address.city, "Seattle");
    }

    #[tokio::test]
    async fn initialize_generates_distinct_ids_when_the_profile_is_absent() {
        let harness = start_flow(Settings::new("token", false));

        harness.flow.initialize(&HashMap::new()).await.unwrap();
        let first = harness
            .view_state
            .shipping_address
            .borrow()
            .clone()
            .unwrap()
            .id;

        harness.flow.initialize(&HashMap::new()).await.unwrap();
        let second = harness
            .view_state
            .shipping_address
            .borrow()
            .clone()
            .unwrap()
            .id;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn initialize_totals_the_eligible_items() {
        let harness = start_flow(Settings::new("token", false));
        harness
            .basket
            .set_local_items(widget_basket())
            .await
            .unwrap();

        harness.flow.initialize(&HashMap::new()).await.unwrap();

        let order = harness.view_state.order.borrow().clone().unwrap();
        let expected = compute_total(&build_order_items(&widget_basket()));
        assert_eq!(order.total, expected);
        // Only the named item survives.
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.status, OrderStatus::Submitted);
        assert_eq!(order.card_type_id, CardType::master_card().id);
        assert!(!*harness.view_state.busy.borrow());

        // Raw basket lines, unfiltered, are what the view lists.
        assert_eq!(harness.view_state.order_items.borrow().len(), 2);
    }

    #[tokio::test]
    async fn initialize_numbers_the_draft_only_in_mock_mode() {
        let mock = start_flow(Settings::new("token", true));
        mock.flow.initialize(&HashMap::new()).await.unwrap();
        let order = mock.view_state.order.borrow().clone().unwrap();
        assert_eq!(order.order_number, Some(1));

        let real = start_flow(Settings::new("token", false));
        real.flow.initialize(&HashMap::new()).await.unwrap();
        let order = real.view_state.order.borrow().clone().unwrap();
        assert_eq!(order.order_number, None);
    }
}
