//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;
use super::organization::Organization;
use super::registration::Registration;
use crate::utils::pricing;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_registration_open: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_registration_required: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_open_to_outsiders: bool,
    #[serde(default, alias = "organization")]
    pub org: Option<Organization>,
    #[serde(default, alias = "TicketCategories", deserialize_with = "de::null_default")]
    pub ticket_categories: Vec<TicketCategory>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub registrations: Vec<Registration>,
    // Image field names vary between API versions; `banner()` picks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "locationName", alias = "venue")]
    pub location: Option<String>,
}

/// A priced registration tier of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketCategory {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::price")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub capacity: u32,
    #[serde(default)]
    pub registration_deadline: Option<DateTime<Utc>>,
}

impl Event {
    /// First non-empty banner image, whichever field name the API used
    pub fn banner(&self) -> Option<&str> {
        [&self.banner_url, &self.banner_image, &self.cover_image_url, &self.image_url]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .find(|s| !s.trim().is_empty())
    }

    /// Organization acronym, falling back to its name
    pub fn organization_label(&self) -> &str {
        self.org
            .as_ref()
            .map(|o| o.short_name())
            .filter(|s| !s.is_empty())
            .unwrap_or("Organization")
    }

    /// Full organization name, empty when unknown
    pub fn organization_name(&self) -> &str {
        self.org.as_ref().map(|o| o.name.as_str()).unwrap_or("")
    }

    pub fn price_label(&self) -> String {
        pricing::price_display(&self.ticket_categories)
    }

    /// Sum of all ticket category capacities
    pub fn total_capacity(&self) -> u64 {
        self.ticket_categories.iter().map(|c| u64::from(c.capacity)).sum()
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    pub fn attended_count(&self) -> usize {
        self.registrations.iter().filter(|r| r.is_attended).count()
    }

    /// Deadline of the first ticket category, or the event start
    pub fn registration_deadline(&self) -> DateTime<Utc> {
        self.ticket_categories
            .first()
            .and_then(|c| c.registration_deadline)
            .unwrap_or(self.date_start)
    }

    pub fn find_ticket_category(&self, id: &str) -> Option<&TicketCategory> {
        self.ticket_categories.iter().find(|c| c.id == id)
    }
}

impl TicketCategory {
    pub fn price_label(&self) -> String {
        pricing::ticket_price_label(self.price)
    }

    /// Whether the category still accepts registrations at `now`
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.registration_deadline.map_or(true, |deadline| now <= deadline)
    }
}
