//! Page fetching, caching and prefetch
//!
//! # Overview
//!
//! The pager module provides:
//! - `Pager` - Owns one `Pagination`, one `PageCache` and the visible list;
//!   resolves the total count, loads pages and navigates
//! - `PagerOptions` - prefetch / offset / cache / infinite switches
//! - `Endpoints` - results and count URLs
//!
//! Every network call happens in sequence: count, then page, then prefetch.
//! Operations take `&mut self`, so calls on one pager cannot overlap.
//!
//! Navigation is staged: the target snapshot is computed, its page (and the
//! prefetch) are fetched, and only then is the new position committed. A
//! failed call leaves the position, count and visible list as they were.

mod types;

pub use types::{Endpoints, PagerOptions};

use crate::cache::PageCache;
use crate::config::PagerConfig;
use crate::error::Result;
use crate::extract::{CountExtractor, FieldPath, Identity, ResultExtractor};
use crate::fetch::{Fetch, HttpFetcher};
use crate::pagination::{Pagination, PaginationSnapshot};
use crate::query::QueryParams;
use crate::types::{JsonValue, PageIndex, Records};
use std::sync::Arc;
use tracing::{debug, info};

/// Fetches, caches and prefetches pages of a remote collection
pub struct Pager {
    fetcher: Arc<dyn Fetch>,
    endpoints: Endpoints,
    options: PagerOptions,
    query_params: QueryParams,
    result_extractor: Box<dyn ResultExtractor>,
    count_extractor: Box<dyn CountExtractor>,
    pagination: Pagination,
    cache: PageCache,
    list: Records,
    loading: bool,
}

impl Pager {
    /// Create a pager with default options and extractors
    ///
    /// Results default to the payload itself (a JSON array) and the count to
    /// the payload's `count` field.
    pub fn new(fetcher: Arc<dyn Fetch>, endpoints: Endpoints, pagination: Pagination) -> Self {
        Self {
            fetcher,
            endpoints,
            options: PagerOptions::default(),
            query_params: QueryParams::default(),
            result_extractor: Box::new(Identity),
            count_extractor: Box::new(FieldPath::default()),
            pagination,
            cache: PageCache::new(),
            list: Records::new(),
            loading: false,
        }
    }

    /// Create an HTTP-backed pager from a validated config
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::with_config(config.http.fetcher_config())?;
        Self::from_config_with_fetcher(config, Arc::new(fetcher))
    }

    /// Create a pager from a config, fetching through `fetcher`
    pub fn from_config_with_fetcher(
        config: &PagerConfig,
        fetcher: Arc<dyn Fetch>,
    ) -> Result<Self> {
        let pagination = config.pagination.build()?;
        let mut pager = Self::new(fetcher, config.endpoints(), pagination)
            .with_options(config.options)
            .with_query_params(config.query_params.clone())
            .with_count_extractor(config.extract.count());
        if let Some(results) = config.extract.results() {
            pager = pager.with_result_extractor(results);
        }
        Ok(pager)
    }

    /// Set options
    #[must_use]
    pub fn with_options(mut self, options: PagerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set query parameter names
    #[must_use]
    pub fn with_query_params(mut self, params: QueryParams) -> Self {
        self.query_params = params;
        self
    }

    /// Set the result extractor
    #[must_use]
    pub fn with_result_extractor(mut self, extractor: impl ResultExtractor + 'static) -> Self {
        self.result_extractor = Box::new(extractor);
        self
    }

    /// Set the count extractor
    #[must_use]
    pub fn with_count_extractor(mut self, extractor: impl CountExtractor + 'static) -> Self {
        self.count_extractor = Box::new(extractor);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Records currently visible
    pub fn list(&self) -> &[JsonValue] {
        &self.list
    }

    /// Current pagination
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Current pagination snapshot
    pub fn snapshot(&self) -> &PaginationSnapshot {
        self.pagination.snapshot()
    }

    /// Page cache
    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Options in effect
    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    /// Endpoints in use
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Is an initialize or navigation call in progress (or did one fail)?
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Resolve the loading flag after a failed call
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Resolve the count, then load the current page
    ///
    /// A page below the first page is reset to the first page.
    pub async fn initialize(&mut self) -> Result<()> {
        self.loading = true;

        let mut staged = *self.pagination.snapshot();
        if staged.page < staged.first_page {
            staged = staged.at_page(staged.first_page);
        }

        let staged = self.resolve_count(&staged).await?;
        self.load(staged).await?;

        self.loading = false;
        Ok(())
    }

    /// Fetch the total record count and recompute the boundaries
    pub async fn update_total_count(&mut self) -> Result<u64> {
        let staged = self.resolve_count(self.pagination.snapshot()).await?;
        self.pagination.replace(staged);
        Ok(staged.count.unwrap_or_default())
    }

    /// Load the page at the current position
    pub async fn update_current_page(&mut self) -> Result<()> {
        let current = *self.pagination.snapshot();
        self.load(current).await
    }

    /// Records of the page described by `snapshot`, from cache when possible
    pub async fn fetch_page(&mut self, snapshot: &PaginationSnapshot) -> Result<Records> {
        if let Some(records) = self.cache.get(snapshot.page) {
            debug!("Page {} served from cache", snapshot.page);
            return Ok(records.clone());
        }

        let url = self.query_params.apply(
            &self.endpoints.fetch_url,
            snapshot,
            self.options.prefer_offset,
        )?;
        debug!("Fetching page {} from {}", snapshot.page, url);

        let payload = self.fetcher.fetch(&url).await?;
        let records = self.result_extractor.extract_results(payload)?;

        if self.options.cache_pages {
            self.cache.insert(snapshot.page, records.clone());
        }
        Ok(records)
    }

    /// Go to the next page (stays put on the last page)
    pub async fn go_to_next_page(&mut self) -> Result<()> {
        let snapshot = self.pagination.snapshot();
        let target = snapshot.next_page().unwrap_or(snapshot.page);
        self.navigate(target).await
    }

    /// Go to the previous page (stays put on the first page)
    pub async fn go_to_previous_page(&mut self) -> Result<()> {
        let snapshot = self.pagination.snapshot();
        let target = snapshot.previous_page().unwrap_or(snapshot.page);
        self.navigate(target).await
    }

    /// Go to the first page
    pub async fn go_to_first_page(&mut self) -> Result<()> {
        let target = self.pagination.first_page();
        self.navigate(target).await
    }

    /// Go to the last page
    pub async fn go_to_last_page(&mut self) -> Result<()> {
        let snapshot = self.pagination.snapshot();
        let target = snapshot.last_page().unwrap_or(snapshot.page);
        self.navigate(target).await
    }

    /// Go to an explicit page
    ///
    /// The page is not bounds-checked; it is taken as given.
    pub async fn go_to_page(&mut self, page: PageIndex) -> Result<()> {
        self.navigate(page).await
    }

    /// Point the pager at a new results endpoint and start over
    ///
    /// The cache and the visible list belong to the old endpoint and are
    /// dropped before re-initializing.
    pub async fn set_fetch_url(&mut self, fetch_url: impl Into<String>) -> Result<()> {
        self.endpoints.fetch_url = fetch_url.into();
        self.cache.clear();
        self.list.clear();
        self.initialize().await
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn navigate(&mut self, page: PageIndex) -> Result<()> {
        self.loading = true;
        let target = self.pagination.snapshot().at_page(page);
        self.load(target).await?;
        self.loading = false;
        Ok(())
    }

    /// Fetch the count for `snapshot` and return it rebuilt around its page
    async fn resolve_count(&self, snapshot: &PaginationSnapshot) -> Result<PaginationSnapshot> {
        let url = self.query_params.apply(
            &self.endpoints.count_url,
            snapshot,
            self.options.prefer_offset,
        )?;
        debug!("Fetching count from {}", url);

        let payload = self.fetcher.fetch(&url).await?;
        let count = self.count_extractor.extract_count(&payload)?;
        info!("Collection has {} records", count);

        Ok(snapshot.with_count(Some(count)).at_page(snapshot.page))
    }

    /// Fetch `target`, prefetch its successor, then commit
    async fn load(&mut self, target: PaginationSnapshot) -> Result<()> {
        let records = self.fetch_page(&target).await?;

        if let Some(next) = self.prefetch_target(&target) {
            debug!("Prefetching page {}", next.page);
            self.fetch_page(&next).await?;
        }

        self.pagination.replace(target);
        if self.options.infinite {
            self.list.extend(records);
        } else {
            self.list = records;
        }
        Ok(())
    }

    /// Snapshot of the page to prefetch after `target`, if any
    fn prefetch_target(&self, target: &PaginationSnapshot) -> Option<PaginationSnapshot> {
        if !self.options.prefetch {
            return None;
        }
        if !self.options.cache_pages {
            debug!("Prefetch skipped: page caching is disabled");
            return None;
        }
        let next = target.next_page()?;
        if target.is_last_page() {
            return None;
        }
        Some(target.at_page(next))
    }
}

impl std::fmt::Debug for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("endpoints", &self.endpoints)
            .field("options", &self.options)
            .field("pagination", &self.pagination)
            .field("cached_pages", &self.cache.len())
            .field("visible", &self.list.len())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
