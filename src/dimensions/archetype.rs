// src/dimensions/archetype.rs
//! Archetype alignment: share of items whose free-text fields mention at
//! least one keyword of the user's style archetype.
//!
//! This is a coarse substring heuristic over normalized text, not semantic
//! matching; the keyword table itself lives in `crate::archetypes`.

use crate::archetypes::ArchetypeTable;
use crate::item::{StyleProfile, WardrobeItem};
use crate::report::ratio_to_score;

/// No profile supplied, or nothing to measure against.
pub const NEUTRAL_SCORE: u8 = 50;
/// Archetype label not in the table: unknown, but assume decent.
pub const UNKNOWN_ARCHETYPE_SCORE: u8 = 60;

/// Archetype alignment in [0, 100].
pub fn score(
    items: &[WardrobeItem],
    profile: Option<&StyleProfile>,
    table: &ArchetypeTable,
) -> u8 {
    let Some(profile) = profile else {
        return NEUTRAL_SCORE;
    };
    let Some(canonical) = table.resolve(&profile.archetype) else {
        metrics::counter!("archetype_unrecognized_total").increment(1);
        return UNKNOWN_ARCHETYPE_SCORE;
    };
    if items.is_empty() {
        // Recognized archetype but no items: nothing measured, stay neutral.
        return NEUTRAL_SCORE;
    }

    let keywords = table.keywords_for(canonical);
    let matching = items
        .iter()
        .filter(|it| {
            let blob = it.text_blob();
            keywords.iter().any(|kw| blob.contains(kw.as_str()))
        })
        .count();

    ratio_to_score(matching as f32 / items.len() as f32)
}
