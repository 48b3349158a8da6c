//! Fetch capability
//!
//! The pager never talks to the network directly; it asks a [`Fetch`]
//! implementation for the decoded JSON behind a URL. Retries, auth and
//! status policy belong to the implementation, not the pager.
//!
//! # Features
//!
//! - **HttpFetcher**: reqwest-backed GET with timeout and default headers
//! - **Rate Limiting**: optional token bucket limiter using governor, handy
//!   because prefetch issues an extra request per navigation

mod http;
mod rate_limit;

pub use http::{HttpFetcher, HttpFetcherConfig, HttpFetcherConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;

/// Fetches a URL and returns its decoded JSON body
///
/// A failed request or a non-success status must come back as an error.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url` and decode the body as JSON
    async fn fetch(&self, url: &str) -> Result<JsonValue>;
}
