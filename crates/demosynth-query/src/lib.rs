//! Read-only queries over a synthesized population.
//!
//! Every operation borrows its input collection and never mutates it:
//! linear search, first-occurrence max-selection (whole collection or a
//! city/group subset), group listing, bulk classification audit, and
//! per-group average rankings.

pub mod audit;
pub mod search;
pub mod stats;

pub use audit::{AuditReport, audit_groups};
pub use search::{
    find_by_id, list_by_group, oldest, oldest_in_city, richest, richest_in_city, richest_in_group,
};
pub use stats::{GroupMetric, group_average, top_group_by_average};
