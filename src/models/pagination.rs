//! Paginated list envelopes

use serde::{Deserialize, Serialize};

use super::de;

/// Pagination metadata returned next to list data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default = "one", deserialize_with = "de::null_default")]
    pub current_page: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub total_items: u64,
}

fn one() -> u32 {
    1
}

/// A page of items plus its metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Wire shapes accepted for list endpoints
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Enveloped {
        data: Vec<T>,
        #[serde(default)]
        meta: Option<PageMeta>,
    },
    Bare(Vec<T>),
}

impl<T> Paginated<T> {
    /// Single page holding all items
    pub fn single(data: Vec<T>) -> Self {
        let meta = PageMeta {
            current_page: 1,
            total_pages: 1,
            total_items: data.len() as u64,
        };
        Self { data, meta }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<'de, T> Deserialize<'de> for Paginated<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match ListEnvelope::deserialize(deserializer)? {
            ListEnvelope::Enveloped { data, meta: Some(meta) } => Paginated { data, meta },
            ListEnvelope::Enveloped { data, meta: None } => Paginated::single(data),
            ListEnvelope::Bare(data) => Paginated::single(data),
        })
    }
}
