//! Application context shared by all pages

use chrono::FixedOffset;

use crate::config::Settings;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers;

/// Settings plus constructed services
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub services: ServiceFactory,
}

impl AppContext {
    pub fn new(settings: Settings) -> Result<Self> {
        let services = ServiceFactory::new(&settings)?;
        Ok(Self { settings, services })
    }

    /// Offset timestamps are displayed in
    pub fn display_offset(&self) -> FixedOffset {
        helpers::display_offset(self.settings.display.utc_offset_hours)
    }

    pub fn page_size(&self) -> u32 {
        self.settings.events.page_size
    }
}
