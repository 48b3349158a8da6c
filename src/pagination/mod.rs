//! Pagination module
//!
//! Page/offset arithmetic with no I/O.
//!
//! # Overview
//!
//! - [`recompute`] - pure function from limit, first page, position and count
//!   to a [`PaginationSnapshot`]
//! - [`PaginationSnapshot`] - immutable position plus derived [`PageBounds`]
//! - [`Pagination`] - thin owner that swaps its snapshot on every change

mod state;
mod types;

pub use state::Pagination;
pub use types::{recompute, PageBounds, PaginationSnapshot, Position};

#[cfg(test)]
mod tests;
