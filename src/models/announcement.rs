//! Event announcement model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventAnnouncement {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "body")]
    pub content: String,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub event_id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
