//! Page handlers
//!
//! Each handler loads what its page needs and renders it as text.

pub mod browse;
pub mod cards;
pub mod event_details;
pub mod events;
pub mod home;
pub mod registration;

pub use browse::run_browse;
pub use cards::EventCard;
pub use event_details::handle_event_details;
pub use events::handle_events_list;
pub use home::handle_home;
pub use registration::handle_registration;
