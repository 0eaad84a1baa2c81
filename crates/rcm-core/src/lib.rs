//! Resident view-state manager.
//!
//! The one component with a precise contract: it owns the authoritative
//! resident collection and all derived view parameters (search text, status
//! filter, tab, age range, join-date range, sort, pagination, selection), and
//! keeps the derived visible list and the selection consistent as the
//! collection and filters change.
//!
//! Key rules:
//!
//! - The visible list is always `sort(filter(collection, params))`.
//! - `current_page` stays within `[1, total_pages]`; operations that shrink
//!   the visible set clamp it down.
//! - Bulk operations act only on `selection ∩ visible`; stale selection ids
//!   are ignored, never mutated.
//! - Changing the status filter, sort, or page size clears the selection.
//! - Failures are typed and local; no operation partially applies.

pub mod error;
pub mod manager;
pub mod params;
pub mod stats;

pub use error::{CoreError, Result};
pub use manager::{Clock, ResidentManager};
pub use params::{
    DEFAULT_PAGE_SIZE, PAGE_SIZES, SortDirection, SortField, StatusFilter, ViewParams,
};
pub use stats::DashboardStats;
