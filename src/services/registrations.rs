//! Registration service

use tracing::{info, warn};

use super::http::ApiClient;
use crate::models::{CreateRegistrationRequest, Registration};
use crate::utils::errors::Result;

pub const REGISTRATIONS_PATH: &str = "/registrations";

#[derive(Debug, Clone)]
pub struct RegistrationService {
    client: ApiClient,
}

impl RegistrationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /registrations`
    pub async fn create(&self, request: &CreateRegistrationRequest) -> Result<Registration> {
        info!(
            event_id = %request.event_id,
            ticket_category_id = %request.ticket_category_id,
            "Submitting registration"
        );

        match self.client.post_json(REGISTRATIONS_PATH, request).await {
            Ok(registration) => Ok(registration),
            Err(e) => {
                warn!(event_id = %request.event_id, error = %e, "Registration rejected");
                Err(e)
            }
        }
    }
}
