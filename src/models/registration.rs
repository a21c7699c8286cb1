//! Registration models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// A created registration as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub event_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub ticket_category_id: Option<String>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_attended: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /registrations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub full_name: String,
    pub school_email: String,
    pub cluster_id: String,
    pub course: String,
    pub year_level: String,
    pub event_id: String,
    pub ticket_category_id: String,
}
