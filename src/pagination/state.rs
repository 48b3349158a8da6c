//! Mutable pagination owner
//!
//! [`Pagination`] holds the current [`PaginationSnapshot`] and replaces it
//! wholesale on every change, so there is never a half-updated state.

use super::types::{recompute, PaginationSnapshot, Position};
use crate::types::PageIndex;
use std::num::NonZeroU64;

/// Owner of the current pagination snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current: PaginationSnapshot,
}

impl Pagination {
    /// Create pagination positioned at the first page
    pub fn new(limit: NonZeroU64, first_page: PageIndex) -> Self {
        Self {
            current: PaginationSnapshot::new(limit, first_page),
        }
    }

    /// Create pagination from optional page, offset and count
    ///
    /// An offset wins over a page. With neither, the first page is used.
    pub fn with_position(
        limit: NonZeroU64,
        first_page: PageIndex,
        page: Option<PageIndex>,
        offset: Option<u64>,
        count: Option<u64>,
    ) -> Self {
        let position = authoritative(page, offset).unwrap_or(Position::Page(first_page));
        Self {
            current: recompute(limit, first_page, position, count),
        }
    }

    /// Recompute from an optional page or offset
    ///
    /// An offset is authoritative when both are given. With neither, only the
    /// boundaries are refreshed.
    pub fn rebuild(&mut self, page: Option<PageIndex>, offset: Option<u64>) {
        self.current = self.current.rebuild(authoritative(page, offset));
    }

    /// Set the total record count and recompute the boundaries
    pub fn set_count(&mut self, count: Option<u64>) {
        self.current = self.current.with_count(count);
    }

    /// Replace the current snapshot
    pub fn replace(&mut self, snapshot: PaginationSnapshot) {
        self.current = snapshot;
    }

    /// Current snapshot
    pub fn snapshot(&self) -> &PaginationSnapshot {
        &self.current
    }

    /// Current page
    pub fn page(&self) -> PageIndex {
        self.current.page
    }

    /// Current offset
    pub fn offset(&self) -> u64 {
        self.current.offset
    }

    /// First page index
    pub fn first_page(&self) -> PageIndex {
        self.current.first_page
    }

    /// Total record count, once known
    pub fn count(&self) -> Option<u64> {
        self.current.count
    }
}

fn authoritative(page: Option<PageIndex>, offset: Option<u64>) -> Option<Position> {
    offset.map(Position::Offset).or(page.map(Position::Page))
}
