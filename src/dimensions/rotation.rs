// src/dimensions/rotation.rs
//! Rotation risk: heuristic likelihood that an item has gone stale and
//! should be resurfaced to the user.

use chrono::{DateTime, Utc};

use crate::item::WardrobeItem;
use crate::tuning::RotationTable;

/// Rotation risk in <0.0, 1.0> at an explicit point in time.
///
/// Deterministic given `now`; the step thresholds come from the tuning
/// table. Items worn "in the future" (clock skew between collaborators)
/// count as freshly worn.
pub fn risk_at(item: &WardrobeItem, now: DateTime<Utc>, table: &RotationTable) -> f32 {
    match item.last_worn {
        None => table.never_worn_risk,
        Some(worn) => {
            let days = (now - worn).num_days().max(0);
            table.risk_for_days(days)
        }
    }
}

/// Convenience wrapper over the current wall-clock time.
pub fn risk(item: &WardrobeItem, table: &RotationTable) -> f32 {
    risk_at(item, Utc::now(), table)
}

/// Whole days since the item was last worn, if ever (for API payloads).
pub fn days_since_worn(item: &WardrobeItem, now: DateTime<Utc>) -> Option<i64> {
    item.last_worn.map(|worn| (now - worn).num_days().max(0))
}
