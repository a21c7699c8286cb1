//! Data models module
//!
//! Wire types exchanged with the Events API

pub mod announcement;
pub(crate) mod de;
pub mod event;
pub mod organization;
pub mod pagination;
pub mod registration;
pub mod ticket;

// Re-export commonly used models
pub use announcement::EventAnnouncement;
pub use event::{Event, TicketCategory};
pub use organization::{Organization, OrganizationParent};
pub use pagination::{PageMeta, Paginated};
pub use registration::{CreateRegistrationRequest, Registration};
pub use ticket::Ticket;
