use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::BasketItem;

/// Lifecycle states an order moves through on the backend. A fresh draft is
/// always `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Submitted,
    AwaitingValidation,
    Paid,
    Shipped,
    Cancelled,
}

/// Card metadata attached to a payment method.
#[derive(Debug, Clone, PartialEq)]
pub struct CardType {
    pub id: i32,
    pub name: String,
}

impl CardType {
    /// The card type every draft is stamped with, regardless of what the
    /// profile actually stores. Known quirk, kept deliberately.
    pub fn master_card() -> Self {
        Self {
            id: 3,
            name: "MasterCard".to_string(),
        }
    }
}

/// Payment fields gathered from the profile. Built only to populate the
/// order draft, never retained.
#[derive(Debug, Clone)]
pub struct PaymentInfo {
    pub card_number: String,
    pub card_holder_name: String,
    pub card_type: CardType,
    pub security_number: String,
}

/// One line of an order, mirroring an eligible basket item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Unset until the order is persisted server-side.
    pub order_id: Option<String>,
    pub product_id: String,
    pub product_name: String,
    pub picture_url: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// An in-memory order draft built from basket + profile, not yet guaranteed
/// persisted.
#[derive(Debug, Clone)]
pub struct Order {
    pub buyer_id: String,
    /// Assigned only in mock mode, where the client simulates server-side
    /// numbering as history count + 1.
    pub order_number: Option<u32>,
    pub order_items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub card_holder_name: String,
    pub card_number: String,
    pub card_security_number: String,
    pub card_expiration: DateTime<Utc>,
    pub card_type_id: i32,
    pub shipping_street: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_country: String,
    pub shipping_zip_code: String,
    pub total: Decimal,
}

/// Maps basket lines into order lines. Items with an empty product name are
/// dropped; the rest carry over 1:1 with `order_id` left unset.
pub fn build_order_items(basket_items: &[BasketItem]) -> Vec<OrderItem> {
    basket_items
        .iter()
        .filter(|item| !item.product_name.is_empty())
        .map(|item| OrderItem {
            order_id: None,
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            picture_url: item.picture_url.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        })
        .collect()
}

/// Sums quantity times unit price across all items. Computed once at
/// draft-build time; not recomputed if items change afterwards.
pub fn compute_total(order_items: &[OrderItem]) -> Decimal {
    order_items
        .iter()
        .map(|item| Decimal::from(item.quantity) * item.unit_price)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, unit_price: Decimal) -> BasketItem {
        BasketItem::new("p1", name, "widget.png", quantity, unit_price)
    }

    #[test]
    fn build_order_items_drops_unnamed_items() {
        let items = vec![
            item("Widget", 2, Decimal::new(500, 2)),
            item("", 1, Decimal::new(100, 2)),
            item("Gadget", 3, Decimal::new(250, 2)),
        ];

        let order_items = build_order_items(&items);

        assert_eq!(order_items.len(), 2);
        assert_eq!(order_items[0].product_name, "Widget");
        assert_eq!(order_items[1].product_name, "Gadget");
    }

    #[test]
    fn build_order_items_preserves_fields_and_leaves_order_id_unset() {
        let items = vec![item("Widget", 2, Decimal::new(500, 2))];

        let order_items = build_order_items(&items);

        assert_eq!(order_items.len(), 1);
        let line = &order_items[0];
        assert_eq!(line.order_id, None);
        assert_eq!(line.product_id, "p1");
        assert_eq!(line.picture_url, "widget.png");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Decimal::new(500, 2));
    }

    #[test]
    fn compute_total_of_empty_is_zero() {
        assert_eq!(compute_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn compute_total_sums_quantity_times_price() {
        let order_items = build_order_items(&[
            item("Widget", 2, Decimal::new(500, 2)),
            item("Gadget", 3, Decimal::new(250, 2)),
        ]);

        // 2 * 5.00 + 3 * 2.50
        assert_eq!(compute_total(&order_items), Decimal::new(1750, 2));
    }

    #[test]
    fn compute_total_is_invariant_to_input_order() {
        let mut order_items = build_order_items(&[
            item("Widget", 2, Decimal::new(500, 2)),
            item("Gadget", 3, Decimal::new(250, 2)),
            item("Sprocket", 1, Decimal::new(999, 2)),
        ]);
        let forward = compute_total(&order_items);

        order_items.reverse();
        assert_eq!(compute_total(&order_items), forward);
    }
}
