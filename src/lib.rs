//! ADTO event portal client
//!
//! Typed access to the university Events API together with the page logic
//! of the event portal: event listings with filters and pagination, event
//! detail pages, and registration with client-side validation.

pub mod config;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AdtoError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{AppContext, FilterState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
