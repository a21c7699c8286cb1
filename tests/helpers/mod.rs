//! Test helpers module
//!
//! Mock Events API server, payload builders, and context setup shared by
//! the integration tests.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

pub use api_mock::*;
pub use test_data::*;

use adto_client::{AppContext, Settings};

/// Build an application context pointed at a mock server
pub fn test_context(base_url: &str) -> AppContext {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.api.timeout_seconds = 2;
    settings.filters.search_debounce_ms = 50;
    AppContext::new(settings).expect("Failed to create test context")
}
