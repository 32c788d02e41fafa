use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::BasketClient;
use crate::domain::{BasketCheckout, BasketItem};
use crate::error::BasketError;
use crate::messages::{BasketRequest, ServiceResponse};

/// Basket actor. Owns the locally cached basket lines and accepts checkout
/// submissions, standing in for the remote basket endpoint.
pub struct BasketService {
    receiver: mpsc::Receiver<BasketRequest>,
    items: Vec<BasketItem>,
    checkouts: Vec<BasketCheckout>,
}

impl BasketService {
    pub fn new(buffer_size: usize) -> (Self, BasketClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            items: Vec::new(),
            checkouts: Vec::new(),
        };
        let client = BasketClient::new(sender);
        (service, client)
    }

    #[instrument(name = "basket_service", skip(self))]
    pub async fn run(mut self) {
        info!("BasketService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BasketRequest::LocalItems { respond_to } => {
                    self.handle_local_items(respond_to);
                }
                BasketRequest::Checkout {
                    submission,
                    auth_token,
                    respond_to,
                } => {
                    self.handle_checkout(submission, auth_token, respond_to);
                }
                BasketRequest::ClearBasket {
                    buyer_id,
                    auth_token,
                    respond_to,
                } => {
                    self.handle_clear_basket(buyer_id, auth_token, respond_to);
                }
                BasketRequest::SetLocalItems { items, respond_to } => {
                    self.handle_set_local_items(items, respond_to);
                }
                BasketRequest::Shutdown => {
                    info!("BasketService shutting down");
                    break;
                }
            }
        }

        info!("BasketService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_local_items(&self, respond_to: ServiceResponse<Vec<BasketItem>, BasketError>) {
        debug!("Processing local_items request");

        info!(item_count = self.items.len(), "Returning local basket items");
        let _ = respond_to.send(Ok(self.items.clone()));
    }

    #[instrument(
        fields(buyer = %submission.buyer, request_id = %submission.request_id),
        skip(self, submission, auth_token, respond_to)
    )]
    fn handle_checkout(
        &mut self,
        submission: BasketCheckout,
        auth_token: String,
        respond_to: ServiceResponse<(), BasketError>,
    ) {
        debug!("Processing checkout request");

        let result = if auth_token.is_empty() {
            error!("Checkout rejected: no auth token");
            Err(BasketError::Unauthorized)
        } else {
            self.checkouts.push(submission);
            info!(accepted_total = self.checkouts.len(), "Checkout accepted");
            Ok(())
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(buyer_id = %buyer_id), skip(self, auth_token, respond_to))]
    fn handle_clear_basket(
        &mut self,
        buyer_id: String,
        auth_token: String,
        respond_to: ServiceResponse<(), BasketError>,
    ) {
        debug!("Processing clear_basket request");

        let result = if auth_token.is_empty() {
            error!("Clear rejected: no auth token");
            Err(BasketError::Unauthorized)
        } else {
            info!(cleared = self.items.len(), "Basket cleared");
            self.items.clear();
            Ok(())
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(item_count = items.len()), skip(self, items, respond_to))]
    fn handle_set_local_items(
        &mut self,
        items: Vec<BasketItem>,
        respond_to: ServiceResponse<(), BasketError>,
    ) {
        debug!("Processing set_local_items request");

        self.items = items;
        info!(item_count = self.items.len(), "Local basket replaced");

        let _ = respond_to.send(Ok(()));
    }
}
