// src/dimensions/seasonal.rs
//! Seasonal compatibility: how well the wardrobe fits a target color season.

use crate::item::{SeasonalPalette, WardrobeItem};
use crate::report::ratio_to_score;

/// Returned when no item carries palette scores, or no target is supplied.
pub const NEUTRAL_SCORE: u8 = 50;

/// Seasonal compatibility in [0, 100].
///
/// Only items that went through color analysis (i.e. carry a palette-score
/// map) participate. With no analyzed items or no target palette there is
/// nothing to measure and the neutral default is returned.
pub fn score(items: &[WardrobeItem], target: Option<SeasonalPalette>) -> u8 {
    let analyzed: Vec<_> = items
        .iter()
        .filter_map(|it| it.seasonal_palette_scores.as_ref())
        .collect();
    if analyzed.is_empty() {
        return NEUTRAL_SCORE;
    }
    let Some(target) = target else {
        return NEUTRAL_SCORE;
    };

    let sum: f32 = analyzed
        .iter()
        .map(|scores| {
            scores
                .get(&target)
                .copied()
                .unwrap_or(0.0)
                .clamp(0.0, 1.0)
        })
        .sum();

    ratio_to_score(sum / analyzed.len() as f32)
}
