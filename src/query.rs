//! Pagination query construction
//!
//! Turns a snapshot into query parameters: the page size plus exactly one of
//! offset or page, under caller-chosen parameter names.

use crate::error::Result;
use crate::pagination::PaginationSnapshot;
use serde::{Deserialize, Serialize};
use url::Url;

/// Names of the pagination query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page size parameter
    pub limit: String,
    /// Offset parameter
    pub offset: String,
    /// Page parameter
    pub page: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            limit: "limit".to_string(),
            offset: "offset".to_string(),
            page: "page".to_string(),
        }
    }
}

impl QueryParams {
    /// Create a parameter mapping
    pub fn new(
        limit: impl Into<String>,
        offset: impl Into<String>,
        page: impl Into<String>,
    ) -> Self {
        Self {
            limit: limit.into(),
            offset: offset.into(),
            page: page.into(),
        }
    }

    /// Query pairs for a snapshot, limit first
    pub fn pairs(&self, snapshot: &PaginationSnapshot, prefer_offset: bool) -> Vec<(String, String)> {
        let position = if prefer_offset {
            (self.offset.clone(), snapshot.offset.to_string())
        } else {
            (self.page.clone(), snapshot.page.to_string())
        };
        vec![(self.limit.clone(), snapshot.limit().to_string()), position]
    }

    /// Encoded query string for a snapshot
    pub fn to_query_string(&self, snapshot: &PaginationSnapshot, prefer_offset: bool) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs(snapshot, prefer_offset))
            .finish()
    }

    /// Append the pagination query to `base`
    ///
    /// Query pairs already on `base` are kept, except ones that reuse one of
    /// the pagination parameter names.
    pub fn apply(
        &self,
        base: &str,
        snapshot: &PaginationSnapshot,
        prefer_offset: bool,
    ) -> Result<String> {
        let mut url = Url::parse(base)?;
        let existing: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !self.is_pagination_param(key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(existing)
            .extend_pairs(self.pairs(snapshot, prefer_offset));
        Ok(url.into())
    }

    fn is_pagination_param(&self, key: &str) -> bool {
        key == self.limit || key == self.offset || key == self.page
    }
}
