use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::OrderClient;
use crate::domain::Order;
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};

/// Order actor. Keeps the buyer's order history and persists new orders,
/// standing in for the remote ordering endpoint.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    orders: Vec<Order>,
}

impl OrderService {
    pub fn new(buffer_size: usize) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            orders: Vec::new(),
        };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::ListOrders {
                    auth_token,
                    respond_to,
                } => {
                    self.handle_list_orders(auth_token, respond_to);
                }
                OrderRequest::CreateOrder {
                    order,
                    auth_token,
                    respond_to,
                } => {
                    self.handle_create_order(order, auth_token, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }

        info!("OrderService stopped");
    }

    #[instrument(skip(self, auth_token, respond_to))]
    fn handle_list_orders(
        &self,
        auth_token: String,
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    ) {
        debug!("Processing list_orders request");

        let result = if auth_token.is_empty() {
            error!("List rejected: no auth token");
            Err(OrderError::Unauthorized)
        } else {
            info!(order_count = self.orders.len(), "Listed orders");
            Ok(self.orders.clone())
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(buyer_id = %order.buyer_id, total = %order.total), skip(self, order, auth_token, respond_to))]
    fn handle_create_order(
        &mut self,
        order: Order,
        auth_token: String,
        respond_to: ServiceResponse<(), OrderError>,
    ) {
        debug!("Processing create_order request");

        let result = if auth_token.is_empty() {
            error!("Create rejected: no auth token");
            Err(OrderError::Unauthorized)
        } else {
            self.orders.push(order);
            info!(order_count = self.orders.len(), "Order persisted");
            Ok(())
        };

        let _ = respond_to.send(result);
    }
}
