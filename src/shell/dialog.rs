use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::DialogClient;
use crate::error::ShellError;
use crate::messages::{DialogRequest, ServiceResponse};

/// Dialog actor. Presents alerts by logging them; confirmation is immediate.
pub struct DialogHost {
    receiver: mpsc::Receiver<DialogRequest>,
}

impl DialogHost {
    pub fn new(buffer_size: usize) -> (Self, DialogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let host = Self { receiver };
        let client = DialogClient::new(sender);
        (host, client)
    }

    #[instrument(name = "dialog_host", skip(self))]
    pub async fn run(mut self) {
        info!("DialogHost starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DialogRequest::ShowAlert {
                    message,
                    title,
                    confirm_label,
                    respond_to,
                } => {
                    self.handle_show_alert(message, title, confirm_label, respond_to);
                }
                DialogRequest::Shutdown => {
                    info!("DialogHost shutting down");
                    break;
                }
            }
        }

        info!("DialogHost stopped");
    }

    #[instrument(skip(self, message, title, confirm_label, respond_to))]
    fn handle_show_alert(
        &self,
        message: String,
        title: String,
        confirm_label: String,
        respond_to: ServiceResponse<(), ShellError>,
    ) {
        debug!("Processing show_alert request");

        info!(%title, %message, %confirm_label, "Alert shown");

        let _ = respond_to.send(Ok(()));
    }
}
