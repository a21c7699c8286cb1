//! Issued ticket model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;
use super::event::TicketCategory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub event_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub ticket_category_id: Option<String>,
    #[serde(default)]
    pub ticket_category: Option<TicketCategory>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Name of the category this ticket belongs to, when embedded
    pub fn category_name(&self) -> &str {
        self.ticket_category.as_ref().map(|c| c.name.as_str()).unwrap_or("Ticket")
    }
}
