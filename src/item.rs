// src/item.rs
//! Typed wardrobe inputs: items, style profile, and the twelve color seasons.
//!
//! These are read-only inputs to the scoring functions; nothing in this crate
//! mutates them. Field names serialize camelCase to match the JSON shapes the
//! wardrobe CRUD collaborator produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the twelve predefined color-season categories used in color
/// analysis (e.g. `DARK_AUTUMN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonalPalette {
    LightSpring,
    TrueSpring,
    BrightSpring,
    LightSummer,
    TrueSummer,
    SoftSummer,
    SoftAutumn,
    TrueAutumn,
    DarkAutumn,
    BrightWinter,
    TrueWinter,
    DarkWinter,
}

/// A single wardrobe item as supplied by the caller.
///
/// Every field except `category` is optional; scoring degrades to neutral
/// defaults when data is missing instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    pub category: String,
    /// Hex codes or color names; empty list is allowed.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Per-season fit scores in <0.0, 1.0>, when color analysis ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_palette_scores: Option<HashMap<SeasonalPalette, f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
}

impl WardrobeItem {
    /// Minimal constructor for callers/tests that only care about category.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            colors: Vec::new(),
            seasonal_palette_scores: None,
            brand: None,
            notes: None,
            sub_category: None,
            last_worn: None,
        }
    }

    /// Lowercased concatenation of the free-text fields used by archetype
    /// matching (brand, notes, sub-category).
    pub fn text_blob(&self) -> String {
        let mut out = String::new();
        for part in [&self.brand, &self.notes, &self.sub_category] {
            if let Some(s) = part {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&s.to_lowercase());
            }
        }
        out
    }
}

/// A user's self-selected style persona. Only `archetype` matters to scoring;
/// it is a lookup key into the archetype keyword table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub archetype: String,
}

/// Normalize a color label so "Navy", " navy " and "NAVY" count as one color.
pub fn normalize_color(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Distinct normalized colors of one item (within-item duplicates collapse).
pub fn item_colors(item: &WardrobeItem) -> Vec<String> {
    let mut out: Vec<String> = item
        .colors
        .iter()
        .map(|c| normalize_color(c))
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
