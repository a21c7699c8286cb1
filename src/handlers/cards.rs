//! Presentational event card

use chrono::FixedOffset;

use crate::models::Event;
use crate::utils::helpers;
use crate::utils::pricing::FREE_LABEL;

/// Everything a card shows, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub date_range: String,
    pub time_range: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl EventCard {
    pub fn from_event(event: &Event, offset: FixedOffset) -> Self {
        Self {
            id: event.id.clone(),
            title: event.name.clone(),
            organization: event.organization_name().to_string(),
            date_range: helpers::format_date_range(event.date_start, event.date_end, offset),
            time_range: helpers::format_time_range(event.date_start, event.date_end, offset),
            price: Some(event.price_label()),
            image_url: event.banner().map(str::to_string),
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("┌ {}", self.title)];
        if !self.organization.is_empty() {
            lines.push(format!("│ {}", self.organization));
        }
        lines.push(format!("│ {}", self.date_range));
        lines.push(format!("│ {}", self.time_range));
        lines.push(format!(
            "└ {}  [id: {}]",
            self.price.as_deref().unwrap_or(FREE_LABEL),
            self.id
        ));
        lines.join("\n")
    }
}

/// Render cards separated by blank lines
pub fn render_cards(events: &[Event], offset: FixedOffset) -> String {
    events
        .iter()
        .map(|e| EventCard::from_event(e, offset).render())
        .collect::<Vec<_>>()
        .join("\n\n")
}
