use tokio::sync::oneshot;

use crate::domain::{BasketCheckout, BasketItem, Order, UserProfile};
use crate::error::{BasketError, OrderError, ShellError, UserError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for actor communication. Each variant includes
/// parameters and a oneshot channel for responses.

#[derive(Debug)]
pub enum BasketRequest {
    /// Snapshot of the locally cached basket lines.
    LocalItems {
        respond_to: ServiceResponse<Vec<BasketItem>, BasketError>,
    },
    /// Submit a checkout. Fails on an empty auth token the way the remote
    /// endpoint fails on a missing one.
    Checkout {
        submission: BasketCheckout,
        auth_token: String,
        respond_to: ServiceResponse<(), BasketError>,
    },
    /// Empty the basket after a successful checkout.
    ClearBasket {
        buyer_id: String,
        auth_token: String,
        respond_to: ServiceResponse<(), BasketError>,
    },
    /// Replace the local cache wholesale. Seeding hook for demos and tests.
    SetLocalItems {
        items: Vec<BasketItem>,
        respond_to: ServiceResponse<(), BasketError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum OrderRequest {
    ListOrders {
        auth_token: String,
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    CreateOrder {
        order: Order,
        auth_token: String,
        respond_to: ServiceResponse<(), OrderError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum UserRequest {
    /// The profile may legitimately be absent; callers tolerate `None`.
    GetProfile {
        auth_token: String,
        respond_to: ServiceResponse<Option<UserProfile>, UserError>,
    },
    SetProfile {
        profile: UserProfile,
        respond_to: ServiceResponse<(), UserError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum NavigationRequest {
    NavigateTo {
        route: String,
        respond_to: ServiceResponse<(), ShellError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum DialogRequest {
    ShowAlert {
        message: String,
        title: String,
        confirm_label: String,
        respond_to: ServiceResponse<(), ShellError>,
    },
    Shutdown,
}
