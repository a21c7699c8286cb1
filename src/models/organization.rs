//! Organization models

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub organization_parent_id: Option<String>,
}

/// A cluster grouping child organizations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParent {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "organizationChildren", deserialize_with = "de::null_default")]
    pub organizations: Vec<Organization>,
}

impl Organization {
    /// Acronym if set, otherwise the full name
    pub fn short_name(&self) -> &str {
        self.acronym
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(&self.name)
    }
}
