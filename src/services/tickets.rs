//! Ticket service

use super::http::{segment, ApiClient};
use crate::models::{Paginated, Ticket};
use crate::utils::errors::Result;
use crate::utils::query::{opt, QueryValue, ToQueryPairs};

pub const TICKETS_PATH: &str = "/tickets";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketQueryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub event_id: Option<String>,
}

impl ToQueryPairs for TicketQueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, Option<QueryValue>)> {
        vec![
            ("page", opt(self.page)),
            ("limit", opt(self.limit)),
            ("eventId", opt(self.event_id.as_ref())),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct TicketService {
    client: ApiClient,
}

impl TicketService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /tickets`
    pub async fn list(&self, params: &TicketQueryParams) -> Result<Paginated<Ticket>> {
        self.client.get_json(TICKETS_PATH, &params.to_query_string()).await
    }

    /// Tickets issued for one event
    pub async fn for_event(&self, event_id: &str) -> Result<Paginated<Ticket>> {
        self.list(&TicketQueryParams {
            event_id: Some(event_id.to_string()),
            ..TicketQueryParams::default()
        })
        .await
    }

    /// `GET /tickets/{id}`
    pub async fn get(&self, ticket_id: &str) -> Result<Ticket> {
        self.client
            .get_json(&format!("{}/{}", TICKETS_PATH, segment(ticket_id)), "")
            .await
    }
}
