//! Configuration types
//!
//! Every section except the two URLs is optional and falls back to the
//! defaults below.

use crate::error::{Error, Result};
use crate::extract::FieldPath;
use crate::fetch::{HttpFetcherConfig, RateLimiterConfig};
use crate::pager::{Endpoints, PagerOptions};
use crate::pagination::Pagination;
use crate::query::QueryParams;
use crate::types::{OptionStringExt, PageIndex, StringMap};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete pager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Collection endpoint returning one page of results
    pub fetch_url: String,

    /// Endpoint returning the total record count
    pub count_url: String,

    /// Page size and starting position
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Prefetch / offset / cache / infinite switches
    #[serde(default)]
    pub options: PagerOptions,

    /// Query parameter names
    #[serde(default)]
    pub query_params: QueryParams,

    /// Where results and count live in the payloads
    #[serde(default)]
    pub extract: ExtractSettings,

    /// HTTP fetcher settings
    #[serde(default)]
    pub http: HttpSettings,
}

impl PagerConfig {
    /// Config with the given endpoints and defaults everywhere else
    pub fn new(fetch_url: impl Into<String>, count_url: impl Into<String>) -> Self {
        Self {
            fetch_url: fetch_url.into(),
            count_url: count_url.into(),
            pagination: PaginationSettings::default(),
            options: PagerOptions::default(),
            query_params: QueryParams::default(),
            extract: ExtractSettings::default(),
            http: HttpSettings::default(),
        }
    }

    /// Endpoints section
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.fetch_url, &self.count_url)
    }

    /// Check URLs, limit, parameter names and timeout
    pub fn validate(&self) -> Result<()> {
        super::parser::validate_config(self)
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Page size and starting position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Records per page
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Index of the first page
    #[serde(default)]
    pub first_page: PageIndex,

    /// Starting page
    #[serde(default)]
    pub page: Option<PageIndex>,

    /// Starting offset (wins over `page`)
    #[serde(default)]
    pub offset: Option<u64>,

    /// Known total, if any
    #[serde(default)]
    pub count: Option<u64>,
}

fn default_limit() -> u64 {
    20
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            first_page: 0,
            page: None,
            offset: None,
            count: None,
        }
    }
}

impl PaginationSettings {
    /// Build the pagination state; a zero limit is rejected
    pub fn build(&self) -> Result<Pagination> {
        let limit = NonZeroU64::new(self.limit)
            .ok_or_else(|| Error::invalid_value("pagination.limit", "must be greater than 0"))?;
        Ok(Pagination::with_position(
            limit,
            self.first_page,
            self.page,
            self.offset,
            self.count,
        ))
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Paths to the records and the count within the payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractSettings {
    /// Path to the record array; the payload itself when absent
    #[serde(default)]
    pub results_path: Option<String>,

    /// Path to the count
    #[serde(default = "default_count_path")]
    pub count_path: String,
}

fn default_count_path() -> String {
    "count".to_string()
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            results_path: None,
            count_path: default_count_path(),
        }
    }
}

impl ExtractSettings {
    /// Field path for the records, if one is configured
    pub fn results(&self) -> Option<FieldPath> {
        self.results_path.clone().none_if_empty().map(FieldPath::new)
    }

    /// Field path for the count
    pub fn count(&self) -> FieldPath {
        FieldPath::new(&self.count_path)
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// HTTP fetcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// Request rate cap; unlimited when absent
    #[serde(default)]
    pub requests_per_second: Option<u32>,

    /// Burst size for the rate cap (defaults to the rate)
    #[serde(default)]
    pub burst_size: Option<u32>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: StringMap::new(),
            requests_per_second: None,
            burst_size: None,
        }
    }
}

impl HttpSettings {
    /// Fetcher configuration for these settings
    pub fn fetcher_config(&self) -> HttpFetcherConfig {
        let mut builder =
            HttpFetcherConfig::builder().timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        if let Some(rps) = self.requests_per_second {
            let burst = self.burst_size.unwrap_or(rps);
            builder = builder.rate_limit(RateLimiterConfig::new(rps, burst));
        }
        builder.build()
    }
}
