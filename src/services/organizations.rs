//! Organization service
//!
//! Reference lists backing the organization and cluster filter dropdowns.

use tracing::debug;

use super::http::ApiClient;
use crate::models::{Organization, OrganizationParent, Paginated};
use crate::utils::errors::Result;

/// Organizations and clusters fetched together for the filter bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub organizations: Vec<Organization>,
    pub organization_parents: Vec<OrganizationParent>,
}

#[derive(Debug, Clone)]
pub struct OrganizationService {
    client: ApiClient,
}

impl OrganizationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /organizations/all`
    pub async fn all(&self) -> Result<Vec<Organization>> {
        debug!("Fetching organizations");
        let list: Paginated<Organization> = self.client.get_json("/organizations/all", "").await?;
        Ok(list.data)
    }

    /// `GET /organization-parents`
    pub async fn parents(&self) -> Result<Vec<OrganizationParent>> {
        debug!("Fetching organization parents");
        let list: Paginated<OrganizationParent> =
            self.client.get_json("/organization-parents", "").await?;
        Ok(list.data)
    }

    /// Fetch both reference lists concurrently
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        let (organizations, organization_parents) =
            futures::try_join!(self.all(), self.parents())?;

        Ok(FilterOptions {
            organizations,
            organization_parents,
        })
    }
}

impl FilterOptions {
    /// Organizations belonging to a cluster, or all of them
    pub fn organizations_in(&self, parent_id: Option<&str>) -> Vec<&Organization> {
        match parent_id {
            None => self.organizations.iter().collect(),
            Some(parent_id) => self
                .organizations
                .iter()
                .filter(|o| o.organization_parent_id.as_deref() == Some(parent_id))
                .collect(),
        }
    }
}
