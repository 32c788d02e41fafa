use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::UserClient;
use crate::domain::UserProfile;
use crate::error::UserError;
use crate::messages::{ServiceResponse, UserRequest};

/// User actor. Serves the profile for the current auth token; a missing
/// profile is answered with `None`, never an error.
pub struct UserService {
    receiver: mpsc::Receiver<UserRequest>,
    profile: Option<UserProfile>,
}

impl UserService {
    pub fn new(buffer_size: usize) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            profile: None,
        };
        let client = UserClient::new(sender);
        (service, client)
    }

    #[instrument(name = "user_service", skip(self))]
    pub async fn run(mut self) {
        info!("UserService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::GetProfile {
                    auth_token,
                    respond_to,
                } => {
                    self.handle_get_profile(auth_token, respond_to);
                }
                UserRequest::SetProfile {
                    profile,
                    respond_to,
                } => {
                    self.handle_set_profile(profile, respond_to);
                }
                UserRequest::Shutdown => {
                    info!("UserService shutting down");
                    break;
                }
            }
        }

        info!("UserService stopped");
    }

    #[instrument(skip(self, _auth_token, respond_to))]
    fn handle_get_profile(
        &self,
        _auth_token: String,
        respond_to: ServiceResponse<Option<UserProfile>, UserError>,
    ) {
        debug!("Processing get_profile request");

        match &self.profile {
            Some(profile) => info!(user_id = %profile.user_id, "Profile found"),
            None => debug!("No profile stored"),
        }

        let _ = respond_to.send(Ok(self.profile.clone()));
    }

    #[instrument(fields(user_id = %profile.user_id), skip(self, profile, respond_to))]
    fn handle_set_profile(
        &mut self,
        profile: UserProfile,
        respond_to: ServiceResponse<(), UserError>,
    ) {
        debug!("Processing set_profile request");

        self.profile = Some(profile);
        info!("Profile replaced");

        let _ = respond_to.send(Ok(()));
    }
}
