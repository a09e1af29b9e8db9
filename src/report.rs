//! report.rs — result types for wardrobe scoring: per-dimension metrics,
//! tier verdict, and the aggregate intelligence report.
//!
//! These shapes are what the API serializes; they carry no identity and no
//! lifecycle, recomputed fresh on each call from the current item list and
//! profile.

use serde::{Deserialize, Serialize};

/// One of the four independent sub-scores composing overall wardrobe health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Variety,
    SeasonalCompatibility,
    ArchetypeAlignment,
    ColorHarmony,
}

/// Fixed evaluation order; also the tie-break order for strength/opportunity.
pub const DIMENSIONS: [Dimension; 4] = [
    Dimension::Variety,
    Dimension::SeasonalCompatibility,
    Dimension::ArchetypeAlignment,
    Dimension::ColorHarmony,
];

/// Four-tier verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WardrobeTier {
    Minimal,
    Balanced,
    Diverse,
    Expert,
}

/// The four dimension scores, each clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionalMetrics {
    pub variety: u8,
    pub seasonal_compatibility: u8,
    pub archetype_alignment: u8,
    pub color_harmony: u8,
}

impl DimensionalMetrics {
    pub fn new(variety: u8, seasonal: u8, archetype: u8, harmony: u8) -> Self {
        Self {
            variety: clamp_score(variety),
            seasonal_compatibility: clamp_score(seasonal),
            archetype_alignment: clamp_score(archetype),
            color_harmony: clamp_score(harmony),
        }
    }

    pub fn get(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::Variety => self.variety,
            Dimension::SeasonalCompatibility => self.seasonal_compatibility,
            Dimension::ArchetypeAlignment => self.archetype_alignment,
            Dimension::ColorHarmony => self.color_harmony,
        }
    }
}

/// Derived highlights: where the wardrobe is strongest, where to improve,
/// and a rough count of wearable outfit combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeInsights {
    pub primary_strength: Dimension,
    pub primary_opportunity: Dimension,
    pub estimated_outfit_combinations: u64,
}

/// Complete wardrobe report returned by `/report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeIntelligence {
    pub overall_score: u8,
    pub tier: WardrobeTier,
    pub dimensions: DimensionalMetrics,
    pub insights: WardrobeInsights,
}

/// Clamp to the [0, 100] score range.
pub fn clamp_score(x: u8) -> u8 {
    x.min(100)
}

/// Round a 0..=1 ratio into the [0, 100] score range.
pub fn ratio_to_score(ratio: f32) -> u8 {
    let r = if ratio.is_finite() { ratio } else { 0.0 };
    (r.clamp(0.0, 1.0) * 100.0).round() as u8
}
