// src/dimensions/mod.rs
//! Dimension scorers: four independent heuristics over an in-memory item
//! list, each returning an integer in [0, 100], plus per-item rotation risk.
//!
//! All scorers are pure and total: any input shape (empty lists, missing
//! optional fields, unknown archetypes) degrades to a fixed neutral constant
//! instead of an error.

pub mod archetype;
pub mod harmony;
pub mod rotation;
pub mod seasonal;
pub mod variety;

use crate::archetypes::ArchetypeTable;
use crate::item::{SeasonalPalette, StyleProfile, WardrobeItem};
use crate::report::DimensionalMetrics;

/// Compute all four dimension scores for one wardrobe snapshot.
pub fn compute_metrics(
    items: &[WardrobeItem],
    profile: Option<&StyleProfile>,
    target_palette: Option<SeasonalPalette>,
    table: &ArchetypeTable,
) -> DimensionalMetrics {
    DimensionalMetrics::new(
        variety::score(items),
        seasonal::score(items, target_palette),
        archetype::score(items, profile, table),
        harmony::score(items),
    )
}
