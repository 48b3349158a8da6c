// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pageflow
//!
//! Client-side pagination engine: page/offset arithmetic, page fetching
//! through an injected fetch capability, an in-memory page cache and
//! next-page prefetch.
//!
//! ## Features
//!
//! - **Pure arithmetic**: `recompute` turns limit, first page, position and
//!   count into a `PaginationSnapshot` with clamped next/previous bounds
//! - **Page cache**: pages already seen are served without I/O
//! - **Prefetch**: the following page is fetched into the cache after each load
//! - **Infinite mode**: pages accumulate into one list instead of replacing it
//! - **YAML/JSON config**: endpoints, parameter names and extraction paths
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pageflow::{load_config, Pager, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = load_config("pager.yaml")?;
//!     let mut pager = Pager::from_config(&config)?;
//!
//!     // Count, first page, prefetch of the second page
//!     pager.initialize().await?;
//!     println!("{} records on page {}", pager.list().len(), pager.snapshot().page);
//!
//!     // Served from the cache
//!     pager.go_to_next_page().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          Pager                           │
//! │  initialize · update_total_count · fetch_page · go_to_*  │
//! └──────────────────────────────────────────────────────────┘
//!        │               │               │              │
//! ┌────────────┬─────────────┬───────────────┬────────────────┐
//! │ Pagination │  PageCache  │ Query/Extract │     Fetch      │
//! ├────────────┼─────────────┼───────────────┼────────────────┤
//! │ recompute  │ page → rows │ param names   │ HttpFetcher    │
//! │ bounds     │ non-empty   │ field paths   │ rate limiting  │
//! └────────────┴─────────────┴───────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page/offset arithmetic
pub mod pagination;

/// In-memory page cache
pub mod cache;

/// Query parameter construction
pub mod query;

/// Result and count extraction
pub mod extract;

/// Fetch capability and HTTP implementation
pub mod fetch;

/// Page fetching, caching and prefetch
pub mod pager;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use cache::PageCache;
pub use config::{load_config, load_config_from_str, PagerConfig};
pub use fetch::{Fetch, HttpFetcher, HttpFetcherConfig};
pub use pager::{Endpoints, Pager, PagerOptions};
pub use pagination::{recompute, PageBounds, Pagination, PaginationSnapshot, Position};
pub use query::QueryParams;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
