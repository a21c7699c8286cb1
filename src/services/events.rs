//! Event service
//!
//! Read access to published events and single event details.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::http::{segment, ApiClient};
use crate::models::{Event, Paginated};
use crate::utils::errors::Result;
use crate::utils::query::{opt, QueryValue, ToQueryPairs};

pub const EVENTS_PATH: &str = "/events";

/// Sort direction for event listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Asc,
    Desc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Asc => "asc",
            OrderBy::Desc => "desc",
        }
    }
}

impl std::str::FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(OrderBy::Asc),
            "desc" => Ok(OrderBy::Desc),
            other => Err(format!("unknown order: {}", other)),
        }
    }
}

/// Server-side price filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCategory {
    Free,
    Paid,
}

impl PriceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Free => "free",
            PriceCategory::Paid => "paid",
        }
    }
}

/// Query parameters accepted by the event listing endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQueryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub is_registration_open: Option<bool>,
    pub is_registration_required: Option<bool>,
    pub is_open_to_outsiders: Option<bool>,
    pub organization_id: Option<String>,
    pub organization_parent_id: Option<String>,
    pub search_filter: Option<String>,
    pub order_by: Option<OrderBy>,
    pub price: Option<PriceCategory>,
}

impl ToQueryPairs for EventQueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, Option<QueryValue>)> {
        vec![
            ("page", opt(self.page)),
            ("limit", opt(self.limit)),
            ("isRegistrationOpen", opt(self.is_registration_open)),
            ("isRegistrationRequired", opt(self.is_registration_required)),
            ("isOpenToOutsiders", opt(self.is_open_to_outsiders)),
            ("organizationId", opt(self.organization_id.as_ref())),
            ("organizationParentId", opt(self.organization_parent_id.as_ref())),
            ("searchFilter", opt(self.search_filter.as_ref())),
            ("orderBy", opt(self.order_by.map(|o| o.as_str()))),
            ("price", opt(self.price.map(|p| p.as_str()))),
        ]
    }
}

/// Event service for listing and fetching events
#[derive(Debug, Clone)]
pub struct EventService {
    client: ApiClient,
    featured_limit: u32,
}

impl EventService {
    pub fn new(client: ApiClient, featured_limit: u32) -> Self {
        Self { client, featured_limit }
    }

    /// `GET /events/published`
    pub async fn list_published(&self, params: &EventQueryParams) -> Result<Paginated<Event>> {
        let query = params.to_query_string();
        debug!(query = %query, "Fetching published events");

        let page: Paginated<Event> = self
            .client
            .get_json(&format!("{}/published", EVENTS_PATH), &query)
            .await?;

        info!(
            count = page.data.len(),
            current_page = page.meta.current_page,
            total_pages = page.meta.total_pages,
            "Fetched published events"
        );
        Ok(page)
    }

    /// `GET /events`, including unpublished events visible to the session
    pub async fn list(&self, params: &EventQueryParams) -> Result<Paginated<Event>> {
        let query = params.to_query_string();
        debug!(query = %query, "Fetching events");
        self.client.get_json(EVENTS_PATH, &query).await
    }

    /// `GET /events/{id}`
    pub async fn get(&self, event_id: &str) -> Result<Event> {
        debug!(event_id = event_id, "Fetching event");
        self.client
            .get_json(&format!("{}/{}", EVENTS_PATH, segment(event_id)), "")
            .await
    }

    /// Featured events for the home page
    pub async fn featured(&self) -> Result<Paginated<Event>> {
        let params = EventQueryParams {
            limit: Some(self.featured_limit),
            ..EventQueryParams::default()
        };
        self.list_published(&params).await
    }
}
