use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::Navigator;
use crate::error::ShellError;
use crate::messages::{NavigationRequest, ServiceResponse};

/// Route of the main catalog screen, where the flow lands after a
/// successful checkout.
pub const CATALOG_ROUTE: &str = "//Main/Catalog";

/// Navigation actor. Records every visited route and logs the transition.
pub struct NavigationHost {
    receiver: mpsc::Receiver<NavigationRequest>,
    history: Vec<String>,
}

impl NavigationHost {
    pub fn new(buffer_size: usize) -> (Self, Navigator) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let host = Self {
            receiver,
            history: Vec::new(),
        };
        let navigator = Navigator::new(sender);
        (host, navigator)
    }

    #[instrument(name = "navigation_host", skip(self))]
    pub async fn run(mut self) {
        info!("NavigationHost starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                NavigationRequest::NavigateTo { route, respond_to } => {
                    self.handle_navigate_to(route, respond_to);
                }
                NavigationRequest::Shutdown => {
                    info!("NavigationHost shutting down");
                    break;
                }
            }
        }

        info!("NavigationHost stopped");
    }

    #[instrument(fields(route = %route), skip(self, respond_to))]
    fn handle_navigate_to(&mut self, route: String, respond_to: ServiceResponse<(), ShellError>) {
        debug!("Processing navigate_to request");

        self.history.push(route);
        info!(depth = self.history.len(), "Navigating");

        let _ = respond_to.send(Ok(()));
    }
}
