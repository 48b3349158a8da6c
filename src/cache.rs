//! In-memory page cache
//!
//! Maps a page index to the records fetched for it. Entries live as long as
//! the owning pager; nothing is evicted.

use crate::types::{PageIndex, Records};
use std::collections::HashMap;

/// Page index → fetched records
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    pages: HashMap<PageIndex, Records>,
}

impl PageCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached records for `page`, only if the entry is non-empty
    pub fn get(&self, page: PageIndex) -> Option<&Records> {
        self.pages.get(&page).filter(|records| !records.is_empty())
    }

    /// Is there a non-empty entry for `page`?
    pub fn contains(&self, page: PageIndex) -> bool {
        self.get(page).is_some()
    }

    /// Store records for `page`, replacing any previous entry
    ///
    /// Empty pages are not stored. Returns whether an entry was written.
    pub fn insert(&mut self, page: PageIndex, records: Records) -> bool {
        if records.is_empty() {
            return false;
        }
        self.pages.insert(page, records);
        true
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Number of cached pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
