//! Services module
//!
//! One service per Events API resource, all sharing a single [`ApiClient`].

pub mod announcements;
pub mod events;
pub mod http;
pub mod organizations;
pub mod registrations;
pub mod tickets;

// Re-export commonly used services
pub use announcements::{AnnouncementQueryParams, AnnouncementService};
pub use events::{EventQueryParams, EventService, OrderBy, PriceCategory};
pub use http::ApiClient;
pub use organizations::{FilterOptions, OrganizationService};
pub use registrations::RegistrationService;
pub use tickets::{TicketQueryParams, TicketService};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub organization_service: OrganizationService,
    pub registration_service: RegistrationService,
    pub ticket_service: TicketService,
    pub announcement_service: AnnouncementService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = ApiClient::new(&settings.api)?;

        Ok(Self {
            event_service: EventService::new(client.clone(), settings.events.featured_limit),
            organization_service: OrganizationService::new(client.clone()),
            registration_service: RegistrationService::new(client.clone()),
            ticket_service: TicketService::new(client.clone()),
            announcement_service: AnnouncementService::new(client),
        })
    }
}
