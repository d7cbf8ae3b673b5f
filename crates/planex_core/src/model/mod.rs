//! Dashboard domain model.
//!
//! # Responsibility
//! - Define habits, tasks, unit keys and the dashboard root state.
//! - Keep the persisted JSON layout in one place (serde attributes).
//!
//! # Invariants
//! - Entity ids are generated once at creation and never reused.
//! - Fixed day/week units exist by construction and cannot be removed.

pub mod dashboard;
pub mod habit;
pub mod task;
pub mod units;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Builds `<prefix>-<epoch_ms>-<8 hex>` ids.
///
/// The random suffix keeps two ids minted in the same millisecond distinct.
pub(crate) fn time_based_id(prefix: &str, now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}-{}", now.timestamp_millis(), &suffix[..8])
}
