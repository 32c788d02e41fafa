use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{BasketCheckout, BasketItem, Order, UserProfile};
use crate::error::{BasketError, OrderError, ShellError, UserError};
use crate::messages::{
    BasketRequest, DialogRequest, NavigationRequest, OrderRequest, UserRequest,
};

/// Generate client methods with oneshot channel boilerplate and automatic
/// tracing. Channel failures map to the error type's communication variant.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Generate the fire-and-forget shutdown method shared by every client.
macro_rules! client_shutdown {
    ($client:ty, $request:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn shutdown(&self) -> Result<(), String> {
                debug!("Sending shutdown request");
                self.sender
                    .send($request::Shutdown)
                    .await
                    .map_err(|e| e.to_string())
            }
        }
    };
}

// =============================================================================
// 1. Basket Client
// =============================================================================

#[derive(Clone)]
pub struct BasketClient {
    sender: mpsc::Sender<BasketRequest>,
}

impl BasketClient {
    pub fn new(sender: mpsc::Sender<BasketRequest>) -> Self {
        Self { sender }
    }
}

client_method!(BasketClient => fn local_items() -> Vec<BasketItem> as BasketRequest::LocalItems, Error = BasketError);
client_method!(BasketClient => fn checkout(submission: BasketCheckout, auth_token: String) -> () as BasketRequest::Checkout, Error = BasketError);
client_method!(BasketClient => fn clear_basket(buyer_id: String, auth_token: String) -> () as BasketRequest::ClearBasket, Error = BasketError);
client_method!(BasketClient => fn set_local_items(items: Vec<BasketItem>) -> () as BasketRequest::SetLocalItems, Error = BasketError);
client_shutdown!(BasketClient, BasketRequest);

// =============================================================================
// 2. Order Client
// =============================================================================

#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrderClient => fn list_orders(auth_token: String) -> Vec<Order> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn create_order(order: Order, auth_token: String) -> () as OrderRequest::CreateOrder, Error = OrderError);
client_shutdown!(OrderClient, OrderRequest);

// =============================================================================
// 3. User Client
// =============================================================================

#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }
}

client_method!(UserClient => fn get_profile(auth_token: String) -> Option<UserProfile> as UserRequest::GetProfile, Error = UserError);
client_method!(UserClient => fn set_profile(profile: UserProfile) -> () as UserRequest::SetProfile, Error = UserError);
client_shutdown!(UserClient, UserRequest);

// =============================================================================
// 4. Shell Clients (Navigation + Dialog)
// =============================================================================

#[derive(Clone)]
pub struct Navigator {
    sender: mpsc::Sender<NavigationRequest>,
}

impl Navigator {
    pub fn new(sender: mpsc::Sender<NavigationRequest>) -> Self {
        Self { sender }
    }
}

client_method!(Navigator => fn navigate_to(route: String) -> () as NavigationRequest::NavigateTo, Error = ShellError);
client_shutdown!(Navigator, NavigationRequest);

#[derive(Clone)]
pub struct DialogClient {
    sender: mpsc::Sender<DialogRequest>,
}

impl DialogClient {
    pub fn new(sender: mpsc::Sender<DialogRequest>) -> Self {
        Self { sender }
    }
}

client_method!(DialogClient => fn show_alert(message: String, title: String, confirm_label: String) -> () as DialogRequest::ShowAlert, Error = ShellError);
client_shutdown!(DialogClient, DialogRequest);
