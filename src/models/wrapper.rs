// src/models/wrapper.rs

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::entity::EntityKind;

/// Envelope stored in the engine: free-text metadata for matching plus the real record.
///
/// `id` always mirrors `data`'s id rendered as a string.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchWrapper<T> {
    pub id: Option<String>,
    #[serde(default)]
    pub search_title: Option<String>,
    #[serde(default)]
    pub search_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub entity_ids: Vec<String>,
    pub data: T,
}

impl<T> SearchWrapper<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A record family that lives in one engine index behind a [`SearchWrapper`].
pub trait Searchable: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Option<i64>;

    fn search_title(&self) -> String;

    fn search_description(&self) -> String;

    fn tags(&self) -> Vec<String>;

    fn flags(&self) -> Vec<String> {
        Vec::new()
    }

    fn entity_ids(&self) -> Vec<String> {
        vec![self.id().map(|id| id.to_string()).unwrap_or_default()]
    }

    /// Wraps the record with synthesized search metadata.
    fn into_wrapper(self) -> SearchWrapper<Self>
    where
        Self: Sized,
    {
        SearchWrapper {
            id: self.id().map(|id| id.to_string()),
            search_title: Some(self.search_title()),
            search_description: Some(self.search_description()),
            tags: self.tags(),
            flags: self.flags(),
            entity_ids: self.entity_ids(),
            data: self,
        }
    }
}

pub(crate) fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
