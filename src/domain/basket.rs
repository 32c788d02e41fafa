use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::Order;

/// A single line in the user's basket.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    pub product_id: String,
    pub product_name: String,
    pub picture_url: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl BasketItem {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        picture_url: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            picture_url: picture_url.into(),
            quantity,
            unit_price,
        }
    }
}

/// Checkout submission sent to the basket service.
///
/// Carries the shipping and card fields flattened out of the order draft plus
/// a client-generated `request_id` the backend can use as an idempotency hint.
#[derive(Debug, Clone)]
pub struct BasketCheckout {
    pub buyer: String,
    pub request_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub card_number: String,
    pub card_holder_name: String,
    pub card_expiration: DateTime<Utc>,
    pub card_security_number: String,
    pub card_type_id: i32,
}

impl BasketCheckout {
    /// Maps an order draft to its basket-submission representation.
    ///
    /// The `request_id` starts out nil; the flow assigns a fresh one right
    /// before submitting.
    pub fn from_order(order: &Order) -> Self {
        Self {
            buyer: order.buyer_id.clone(),
            request_id: Uuid::nil(),
            street: order.shipping_street.clone(),
            city: order.shipping_city.clone(),
            state: order.shipping_state.clone(),
            country: order.shipping_country.clone(),
            zip_code: order.shipping_zip_code.clone(),
            card_number: order.card_number.clone(),
            card_holder_name: order.card_holder_name.clone(),
            card_expiration: order.card_expiration,
            card_security_number: order.card_security_number.clone(),
            card_type_id: order.card_type_id,
        }
    }
}
