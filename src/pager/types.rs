//! Pager configuration types

use serde::{Deserialize, Serialize};

/// Behaviour switches for a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerOptions {
    /// Fetch the following page into the cache after each load
    pub prefetch: bool,
    /// Send the offset instead of the page number
    pub prefer_offset: bool,
    /// Store fetched pages in the cache
    pub cache_pages: bool,
    /// Append each loaded page to the visible list instead of replacing it
    pub infinite: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            prefetch: true,
            prefer_offset: false,
            cache_pages: true,
            infinite: false,
        }
    }
}

impl PagerOptions {
    /// Enable or disable next-page prefetch
    #[must_use]
    pub fn prefetch(mut self, enabled: bool) -> Self {
        self.prefetch = enabled;
        self
    }

    /// Query by offset instead of page
    #[must_use]
    pub fn prefer_offset(mut self, enabled: bool) -> Self {
        self.prefer_offset = enabled;
        self
    }

    /// Enable or disable page caching
    #[must_use]
    pub fn cache_pages(mut self, enabled: bool) -> Self {
        self.cache_pages = enabled;
        self
    }

    /// Accumulate pages instead of replacing them
    #[must_use]
    pub fn infinite(mut self, enabled: bool) -> Self {
        self.infinite = enabled;
        self
    }
}

/// Where results and the total count come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Collection endpoint returning one page of results
    pub fetch_url: String,
    /// Endpoint returning the total record count
    pub count_url: String,
}

impl Endpoints {
    /// Create endpoints
    pub fn new(fetch_url: impl Into<String>, count_url: impl Into<String>) -> Self {
        Self {
            fetch_url: fetch_url.into(),
            count_url: count_url.into(),
        }
    }
}
