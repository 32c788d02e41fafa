//! # Mock Framework
//!
//! Utilities for testing the checkout flow in isolation.
//!
//! Instead of spinning up real service actors, tests create "mock clients"
//! whose sending side is handed to the flow while the test keeps the
//! receiving side. The test then inspects each request as it arrives and
//! answers through its responder, simulating the collaborator's behavior
//! (success, failure, delays) deterministically.

use tokio::sync::mpsc;

use crate::clients::{BasketClient, DialogClient, Navigator, OrderClient, UserClient};
use crate::domain::{BasketCheckout, BasketItem, Order, UserProfile};
use crate::error::{BasketError, OrderError, ShellError, UserError};
use crate::messages::{
    BasketRequest, DialogRequest, NavigationRequest, OrderRequest, ServiceResponse, UserRequest,
};

pub fn mock_basket_client(buffer_size: usize) -> (BasketClient, mpsc::Receiver<BasketRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (BasketClient::new(sender), receiver)
}

pub fn mock_order_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

pub fn mock_user_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<UserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

pub fn mock_navigator(buffer_size: usize) -> (Navigator, mpsc::Receiver<NavigationRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Navigator::new(sender), receiver)
}

pub fn mock_dialog_client(buffer_size: usize) -> (DialogClient, mpsc::Receiver<DialogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DialogClient::new(sender), receiver)
}

// Helpers that assert the next message is a specific request and hand back
// its parameters together with the responder.

pub async fn expect_local_items(
    receiver: &mut mpsc::Receiver<BasketRequest>,
) -> Option<ServiceResponse<Vec<BasketItem>, BasketError>> {
    match receiver.recv().await {
        Some(BasketRequest::LocalItems { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_checkout(
    receiver: &mut mpsc::Receiver<BasketRequest>,
) -> Option<(BasketCheckout, String, ServiceResponse<(), BasketError>)> {
    match receiver.recv().await {
        Some(BasketRequest::Checkout {
            submission,
            auth_token,
            respond_to,
        }) => Some((submission, auth_token, respond_to)),
        _ => None,
    }
}

pub async fn expect_clear_basket(
    receiver: &mut mpsc::Receiver<BasketRequest>,
) -> Option<(String, String, ServiceResponse<(), BasketError>)> {
    match receiver.recv().await {
        Some(BasketRequest::ClearBasket {
            buyer_id,
            auth_token,
            respond_to,
        }) => Some((buyer_id, auth_token, respond_to)),
        _ => None,
    }
}

pub async fn expect_get_profile(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, ServiceResponse<Option<UserProfile>, UserError>)> {
    match receiver.recv().await {
        Some(UserRequest::GetProfile {
            auth_token,
            respond_to,
        }) => Some((auth_token, respond_to)),
        _ => None,
    }
}

pub async fn expect_list_orders(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, ServiceResponse<Vec<Order>, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::ListOrders {
            auth_token,
            respond_to,
        }) => Some((auth_token, respond_to)),
        _ => None,
    }
}

pub async fn expect_create_order(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(Order, String, ServiceResponse<(), OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::CreateOrder {
            order,
            auth_token,
            respond_to,
        }) => Some((order, auth_token, respond_to)),
        _ => None,
    }
}

pub async fn expect_navigate_to(
    receiver: &mut mpsc::Receiver<NavigationRequest>,
) -> Option<(String, ServiceResponse<(), ShellError>)> {
    match receiver.recv().await {
        Some(NavigationRequest::NavigateTo { route, respond_to }) => Some((route, respond_to)),
        _ => None,
    }
}

pub async fn expect_show_alert(
    receiver: &mut mpsc::Receiver<DialogRequest>,
) -> Option<(String, String, String, ServiceResponse<(), ShellError>)> {
    match receiver.recv().await {
        Some(DialogRequest::ShowAlert {
            message,
            title,
            confirm_label,
            respond_to,
        }) => Some((message, title, confirm_label, respond_to)),
        _ => None,
    }
}
