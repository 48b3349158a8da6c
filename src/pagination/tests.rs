//! Tests for pagination module

use super::*;
use std::num::NonZeroU64;
use test_case::test_case;

fn limit(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_snapshot_new_starts_at_first_page() {
    let snapshot = PaginationSnapshot::new(limit(10), 1);
    assert_eq!(snapshot.page, 1);
    assert_eq!(snapshot.offset, 0);
    assert!(snapshot.count.is_none());
    assert!(snapshot.bounds.is_none());
    assert!(snapshot.last_page().is_none());
    assert!(!snapshot.is_last_page());
}

#[test]
fn test_recompute_from_offset() {
    let snapshot = recompute(limit(10), 1, Position::Offset(25), None);
    assert_eq!(snapshot.page, 3);
    assert_eq!(snapshot.offset, 25);
}

#[test]
fn test_recompute_from_page() {
    let snapshot = recompute(limit(10), 1, Position::Page(3), None);
    assert_eq!(snapshot.page, 3);
    assert_eq!(snapshot.offset, 20);
}

#[test]
fn test_pagination_defaults_to_first_page() {
    let pagination = Pagination::with_position(limit(20), 1, None, None, None);
    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.offset(), 0);
}

#[test]
fn test_pagination_offset_wins_over_page() {
    let pagination = Pagination::with_position(limit(10), 0, Some(7), Some(30), None);
    assert_eq!(pagination.page(), 3);
    assert_eq!(pagination.offset(), 30);
}

#[test]
fn test_pagination_with_count_has_bounds() {
    let pagination = Pagination::with_position(limit(10), 0, Some(1), None, Some(25));
    assert_eq!(pagination.count(), Some(25));
    assert_eq!(pagination.snapshot().last_page(), Some(2));
    assert_eq!(pagination.snapshot().next_page(), Some(2));
    assert_eq!(pagination.snapshot().previous_page(), Some(0));
}

// ============================================================================
// Bounds Tests
// ============================================================================

#[test_case(10, 25, 0, 0 => (3, 2, 1, 0) ; "zero based first page")]
#[test_case(10, 25, 0, 2 => (3, 2, 2, 1) ; "zero based last page")]
#[test_case(10, 25, 1, 1 => (3, 3, 2, 1) ; "one based first page")]
#[test_case(10, 30, 1, 3 => (3, 3, 3, 2) ; "one based exact multiple")]
#[test_case(7, 1, 0, 0 => (1, 0, 0, 0) ; "single record")]
#[test_case(10, 0, 1, 1 => (0, 1, 1, 1) ; "empty collection")]
fn test_bounds_pages(limit_value: u64, count: u64, first: u64, page: u64) -> (u64, u64, u64, u64) {
    let snapshot = recompute(limit(limit_value), first, Position::Page(page), Some(count));
    let bounds = snapshot.bounds.unwrap();
    (bounds.pages, bounds.last_page, bounds.next_page, bounds.previous_page)
}

#[test_case(0 => (20, 10, 0) ; "first page")]
#[test_case(10 => (20, 20, 0) ; "offset equal to limit")]
#[test_case(15 => (20, 20, 5) ; "offset between pages")]
#[test_case(20 => (20, 20, 10) ; "last page")]
#[test_case(5 => (20, 15, 0) ; "offset inside first page")]
fn test_bounds_offsets(offset: u64) -> (u64, u64, u64) {
    let snapshot = recompute(limit(10), 0, Position::Offset(offset), Some(25));
    let bounds = snapshot.bounds.unwrap();
    (bounds.last_offset, bounds.next_offset, bounds.previous_offset)
}

#[test]
fn test_bounds_last_offset_one_based() {
    let snapshot = recompute(limit(10), 1, Position::Page(1), Some(25));
    assert_eq!(snapshot.last_offset(), Some(20));
    assert_eq!(snapshot.at_page(3).offset, 20);
}

#[test]
fn test_bounds_empty_collection() {
    let snapshot = recompute(limit(10), 0, Position::Page(0), Some(0));
    assert_eq!(snapshot.pages(), Some(0));
    assert_eq!(snapshot.last_page(), Some(0));
    assert_eq!(snapshot.last_offset(), Some(0));
    assert_eq!(snapshot.next_offset(), Some(0));
    assert!(snapshot.is_last_page());
}

#[test]
fn test_page_beyond_last_is_kept() {
    let snapshot = recompute(limit(10), 0, Position::Page(10), Some(25));
    assert_eq!(snapshot.page, 10);
    assert_eq!(snapshot.offset, 100);
    assert_eq!(snapshot.next_page(), Some(2));
    assert_eq!(snapshot.previous_page(), Some(2));
    assert_eq!(snapshot.next_offset(), Some(20));
}

#[test]
fn test_page_below_first_is_kept() {
    let snapshot = recompute(limit(10), 1, Position::Page(0), Some(25));
    assert_eq!(snapshot.page, 0);
    assert_eq!(snapshot.offset, 0);
    assert_eq!(snapshot.previous_page(), Some(1));
    assert_eq!(snapshot.next_page(), Some(1));
}

#[test]
fn test_previous_page_clamps_at_first_page() {
    let snapshot = recompute(limit(10), 0, Position::Page(0), Some(25));
    assert_eq!(snapshot.previous_page(), Some(0));

    let snapshot = recompute(limit(10), 1, Position::Page(1), Some(25));
    assert_eq!(snapshot.previous_page(), Some(1));
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_offset_page_round_trip() {
    for limit_value in 1u64..=7 {
        for first in 0..=2 {
            for offset in 0..60 {
                let snapshot = recompute(limit(limit_value), first, Position::Offset(offset), None);
                assert_eq!(snapshot.page, offset / limit_value + first);

                let back = snapshot.at_page(snapshot.page);
                assert_eq!(back.offset, offset - offset % limit_value);
                if offset % limit_value == 0 {
                    assert_eq!(back.offset, offset);
                }
            }
        }
    }
}

#[test]
fn test_navigation_stays_in_bounds() {
    for limit_value in 1u64..=7 {
        for first in 0u64..=1 {
            for count in 1u64..=60 {
                let last = count.div_ceil(limit_value) - 1 + first;
                for page in first..=last {
                    let snapshot =
                        recompute(limit(limit_value), first, Position::Page(page), Some(count));
                    let bounds = snapshot.bounds.unwrap();

                    assert_eq!(bounds.last_page, last);
                    assert!((first..=last).contains(&bounds.next_page));
                    assert!((first..=last).contains(&bounds.previous_page));
                    assert!(bounds.next_offset <= bounds.last_offset);
                }
            }
        }
    }
}

#[test]
fn test_rebuild_without_position_is_idempotent() {
    let snapshot = recompute(limit(10), 0, Position::Offset(15), Some(42));
    let once = snapshot.rebuild(None);
    let twice = once.rebuild(None);

    assert_eq!(once, snapshot);
    assert_eq!(twice, once);
    assert_eq!(twice.offset, 15);
}

// ============================================================================
// Pagination Owner Tests
// ============================================================================

#[test]
fn test_pagination_rebuild_page() {
    let mut pagination = Pagination::new(limit(10), 0);
    pagination.rebuild(Some(4), None);
    assert_eq!(pagination.page(), 4);
    assert_eq!(pagination.offset(), 40);
}

#[test]
fn test_pagination_rebuild_offset() {
    let mut pagination = Pagination::new(limit(10), 1);
    pagination.rebuild(Some(9), Some(40));
    assert_eq!(pagination.page(), 5);
    assert_eq!(pagination.offset(), 40);
}

#[test]
fn test_pagination_rebuild_nothing_keeps_position() {
    let mut pagination = Pagination::with_position(limit(10), 0, Some(2), None, None);
    pagination.rebuild(None, None);
    assert_eq!(pagination.page(), 2);
    assert_eq!(pagination.offset(), 20);
}

#[test]
fn test_pagination_set_count() {
    let mut pagination = Pagination::new(limit(10), 0);
    assert!(pagination.snapshot().bounds.is_none());

    pagination.set_count(Some(95));
    assert_eq!(pagination.snapshot().pages(), Some(10));
    assert_eq!(pagination.snapshot().last_page(), Some(9));
    assert_eq!(pagination.page(), 0);

    pagination.set_count(None);
    assert!(pagination.snapshot().bounds.is_none());
}

#[test]
fn test_at_page_does_not_touch_owner() {
    let pagination = Pagination::with_position(limit(10), 0, Some(0), None, Some(25));
    let next = pagination.snapshot().at_page(1);

    assert_eq!(next.page, 1);
    assert_eq!(next.offset, 10);
    assert_eq!(next.count, Some(25));
    assert_eq!(pagination.page(), 0);
    assert_eq!(pagination.offset(), 0);
}

#[test]
fn test_pagination_replace() {
    let mut pagination = Pagination::with_position(limit(10), 0, Some(0), None, Some(25));
    let staged = pagination.snapshot().at_page(2);
    pagination.replace(staged);
    assert_eq!(pagination.page(), 2);
    assert!(pagination.snapshot().is_last_page());
}

#[test]
fn test_snapshot_serializes_flat_bounds() {
    let snapshot = recompute(limit(10), 0, Position::Page(1), Some(25));
    let json = serde_json::to_value(snapshot).unwrap();
    assert_eq!(json["limit"], 10);
    assert_eq!(json["page"], 1);
    assert_eq!(json["last_page"], 2);
    assert_eq!(json["next_offset"], 20);

    let unknown = serde_json::to_value(PaginationSnapshot::new(limit(10), 0)).unwrap();
    assert!(unknown.get("last_page").is_none());
    assert!(unknown["count"].is_null());
}

// ============================================================================
// Extreme Position Tests
// ============================================================================

#[test]
fn test_huge_page_saturates_offset() {
    let snapshot = recompute(limit(10), 0, Position::Page(u64::MAX / 2), Some(25));
    assert_eq!(snapshot.offset, u64::MAX);

    let bounds = snapshot.bounds.unwrap();
    assert_eq!(bounds.last_page, 2);
    assert_eq!(bounds.next_page, 2);
    assert_eq!(bounds.previous_page, 2);
    assert_eq!(bounds.next_offset, 20);
}

#[test]
fn test_huge_offset_stays_clamped() {
    let snapshot = recompute(limit(10), 0, Position::Offset(u64::MAX - 3), Some(25));
    assert_eq!(snapshot.page, (u64::MAX - 3) / 10);

    let bounds = snapshot.bounds.unwrap();
    assert_eq!(bounds.next_offset, 20);
    assert_eq!(bounds.previous_offset, u64::MAX - 13);
}

#[test]
fn test_huge_first_page_saturates_page() {
    let snapshot = recompute(limit(1), u64::MAX, Position::Offset(5), Some(3));
    assert_eq!(snapshot.page, u64::MAX);
    assert_eq!(snapshot.bounds.unwrap().last_page, u64::MAX);

    let back = PaginationSnapshot::new(limit(10), 1).at_page(u64::MAX);
    assert_eq!(back.offset, u64::MAX);
}
