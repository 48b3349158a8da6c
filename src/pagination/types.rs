//! Pagination types
//!
//! A [`PaginationSnapshot`] is an immutable value holding the page size, the
//! current position and, once the total is known, the derived boundaries.
//! Every mutation produces a new snapshot through [`recompute`].

use crate::types::PageIndex;
use serde::Serialize;
use std::num::NonZeroU64;

/// Which of page or offset is the authoritative input for a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Page index; the offset is derived from it
    Page(PageIndex),
    /// Record offset; the page is derived from it
    Offset(u64),
}

/// Boundaries derived from a known record count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageBounds {
    /// Number of pages, `ceil(count / limit)`
    pub pages: u64,
    /// Index of the last page
    pub last_page: PageIndex,
    /// Page after the current one, clamped to `last_page`
    pub next_page: PageIndex,
    /// Page before the current one, clamped to `first_page`
    pub previous_page: PageIndex,
    /// Offset of the last page
    pub last_offset: u64,
    /// Offset of the following page, clamped to `last_offset`
    pub next_offset: u64,
    /// Offset of the preceding page, floored at 0
    pub previous_offset: u64,
}

impl PageBounds {
    /// Derive the boundaries for a position within `count` records
    ///
    /// An empty collection still has one (empty) page at `first_page`.
    pub fn compute(
        limit: NonZeroU64,
        first_page: PageIndex,
        page: PageIndex,
        offset: u64,
        count: u64,
    ) -> Self {
        let limit = limit.get();
        let pages = count.div_ceil(limit);
        let last_page = first_page.saturating_add(pages.saturating_sub(1));
        let last_offset = pages.saturating_sub(1).saturating_mul(limit);

        let previous_page = if page > first_page {
            (page - 1).min(last_page)
        } else {
            first_page
        };
        let next_page = if page < last_page {
            (page + 1).max(first_page)
        } else {
            last_page
        };

        // Compared against `limit`, not 0: offsets within the first page of
        // records step back to 0.
        let previous_offset = if offset > limit { offset - limit } else { 0 };
        let next_offset = offset.saturating_add(limit).min(last_offset);

        Self {
            pages,
            last_page,
            next_page,
            previous_page,
            last_offset,
            next_offset,
            previous_offset,
        }
    }
}

/// Current pagination position and its derived boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationSnapshot {
    /// Records per page
    pub limit: NonZeroU64,
    /// Index of the first page (usually 0 or 1)
    pub first_page: PageIndex,
    /// Current page
    pub page: PageIndex,
    /// Offset of the first record of the current page
    pub offset: u64,
    /// Total number of records, once known
    pub count: Option<u64>,
    /// Boundaries, present only when `count` is known
    #[serde(flatten)]
    pub bounds: Option<PageBounds>,
}

/// Build a snapshot from scratch
///
/// `position` decides which of page/offset is authoritative; the other one
/// is recomputed. Boundaries are derived when `count` is known.
pub fn recompute(
    limit: NonZeroU64,
    first_page: PageIndex,
    position: Position,
    count: Option<u64>,
) -> PaginationSnapshot {
    let (page, offset) = resolve(limit, first_page, position);
    PaginationSnapshot {
        limit,
        first_page,
        page,
        offset,
        count,
        bounds: count.map(|c| PageBounds::compute(limit, first_page, page, offset, c)),
    }
}

/// Resolve a position into a consistent `(page, offset)` pair
fn resolve(limit: NonZeroU64, first_page: PageIndex, position: Position) -> (PageIndex, u64) {
    match position {
        Position::Offset(offset) => ((offset / limit.get()).saturating_add(first_page), offset),
        // A page below `first_page` is kept as given; its offset floors at 0 and
        // saturates at `u64::MAX`.
        Position::Page(page) => (
            page,
            page.saturating_sub(first_page).saturating_mul(limit.get()),
        ),
    }
}

impl PaginationSnapshot {
    /// Snapshot at the first page with no known count
    pub fn new(limit: NonZeroU64, first_page: PageIndex) -> Self {
        recompute(limit, first_page, Position::Page(first_page), None)
    }

    /// Rebuild from an optional authoritative position
    ///
    /// With `None` the page and offset are kept and only the boundaries are
    /// recomputed, so repeated calls are idempotent.
    #[must_use]
    pub fn rebuild(&self, position: Option<Position>) -> Self {
        let (page, offset) = match position {
            Some(position) => resolve(self.limit, self.first_page, position),
            None => (self.page, self.offset),
        };
        Self {
            page,
            offset,
            bounds: self
                .count
                .map(|c| PageBounds::compute(self.limit, self.first_page, page, offset, c)),
            ..*self
        }
    }

    /// Same position with a new record count
    #[must_use]
    pub fn with_count(&self, count: Option<u64>) -> Self {
        Self { count, ..*self }.rebuild(None)
    }

    /// Independent snapshot positioned at `page`
    #[must_use]
    pub fn at_page(&self, page: PageIndex) -> Self {
        self.rebuild(Some(Position::Page(page)))
    }

    /// Page size as a plain integer
    pub fn limit(&self) -> u64 {
        self.limit.get()
    }

    /// Number of pages, if the count is known
    pub fn pages(&self) -> Option<u64> {
        self.bounds.map(|b| b.pages)
    }

    /// Last page, if the count is known
    pub fn last_page(&self) -> Option<PageIndex> {
        self.bounds.map(|b| b.last_page)
    }

    /// Next page, if the count is known
    pub fn next_page(&self) -> Option<PageIndex> {
        self.bounds.map(|b| b.next_page)
    }

    /// Previous page, if the count is known
    pub fn previous_page(&self) -> Option<PageIndex> {
        self.bounds.map(|b| b.previous_page)
    }

    /// Last offset, if the count is known
    pub fn last_offset(&self) -> Option<u64> {
        self.bounds.map(|b| b.last_offset)
    }

    /// Next offset, if the count is known
    pub fn next_offset(&self) -> Option<u64> {
        self.bounds.map(|b| b.next_offset)
    }

    /// Previous offset, if the count is known
    pub fn previous_offset(&self) -> Option<u64> {
        self.bounds.map(|b| b.previous_offset)
    }

    /// Is the current page the last one? False while the count is unknown.
    pub fn is_last_page(&self) -> bool {
        self.last_page() == Some(self.page)
    }
}
