//! Event announcement service

use super::http::{segment, ApiClient};
use crate::models::{EventAnnouncement, Paginated};
use crate::utils::errors::Result;
use crate::utils::query::{opt, QueryValue, ToQueryPairs};

pub const ANNOUNCEMENTS_PATH: &str = "/event-announcements";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnouncementQueryParams {
    pub event_id: Option<String>,
    pub organization_id: Option<String>,
}

impl ToQueryPairs for AnnouncementQueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, Option<QueryValue>)> {
        vec![
            ("eventId", opt(self.event_id.as_ref())),
            ("organizationId", opt(self.organization_id.as_ref())),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct AnnouncementService {
    client: ApiClient,
}

impl AnnouncementService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /event-announcements`
    pub async fn list(&self, params: &AnnouncementQueryParams) -> Result<Vec<EventAnnouncement>> {
        let list: Paginated<EventAnnouncement> = self
            .client
            .get_json(ANNOUNCEMENTS_PATH, &params.to_query_string())
            .await?;
        Ok(list.data)
    }

    /// Announcements for one event, newest first
    pub async fn for_event(&self, event_id: &str) -> Result<Vec<EventAnnouncement>> {
        let mut announcements = self
            .list(&AnnouncementQueryParams {
                event_id: Some(event_id.to_string()),
                ..AnnouncementQueryParams::default()
            })
            .await?;
        announcements.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(announcements)
    }

    /// `GET /event-announcements/{id}`
    pub async fn get(&self, announcement_id: &str) -> Result<EventAnnouncement> {
        self.client
            .get_json(&format!("{}/{}", ANNOUNCEMENTS_PATH, segment(announcement_id)), "")
            .await
    }
}
