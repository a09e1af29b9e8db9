// src/dimensions/variety.rs
//! Variety: blends color diversity with category balance.

use std::collections::{HashMap, HashSet};

use crate::item::{item_colors, WardrobeItem};
use crate::report::ratio_to_score;

/// Weight of color diversity vs. category balance in the blend.
const COLOR_WEIGHT: f32 = 0.6;
const CATEGORY_WEIGHT: f32 = 0.4;

/// Distinct colors are measured against half the item count: a wardrobe
/// where every second item introduces a new color maxes the diversity factor.
const COLORS_PER_ITEM_TARGET: f32 = 0.5;

/// Variety score in [0, 100]. Empty wardrobe → 0.
pub fn score(items: &[WardrobeItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let total = items.len() as f32;

    let mut distinct_colors: HashSet<String> = HashSet::new();
    let mut category_counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        for c in item_colors(item) {
            distinct_colors.insert(c);
        }
        *category_counts
            .entry(item.category.trim().to_lowercase())
            .or_insert(0) += 1;
    }

    let max_category = category_counts.values().copied().max().unwrap_or(0) as f32;
    let category_balance = 1.0 - max_category / total;

    let color_diversity =
        (distinct_colors.len() as f32 / (total * COLORS_PER_ITEM_TARGET)).min(1.0);

    ratio_to_score(
        (COLOR_WEIGHT * color_diversity + CATEGORY_WEIGHT * category_balance).min(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, colors: &[&str]) -> WardrobeItem {
        let mut it = WardrobeItem::new(category);
        it.colors = colors.iter().map(|c| c.to_string()).collect();
        it
    }

    #[test]
    fn empty_wardrobe_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn monochrome_single_category_scores_low() {
        let items = vec![
            item("tops", &["black"]),
            item("tops", &["black"]),
            item("tops", &["black"]),
            item("tops", &["black"]),
        ];
        // One color over four items, zero category balance.
        // diversity = 1/(4*0.5) = 0.5 → 0.6*0.5 = 0.30
        assert_eq!(score(&items), 30);
    }

    #[test]
    fn colorful_balanced_wardrobe_scores_high() {
        let items = vec![
            item("tops", &["red", "white"]),
            item("bottoms", &["blue", "olive"]),
            item("shoes", &["brown"]),
            item("outerwear", &["camel"]),
        ];
        // 6 distinct colors / (4*0.5) caps diversity at 1; balance = 1 - 1/4.
        // 0.6*1.0 + 0.4*0.75 = 0.90
        assert_eq!(score(&items), 90);
    }

    #[test]
    fn color_case_does_not_inflate_diversity() {
        let items = vec![item("tops", &["Navy", "navy "]), item("bottoms", &["NAVY"])];
        // Still one distinct color.
        let same = vec![item("tops", &["navy"]), item("bottoms", &["navy"])];
        assert_eq!(score(&items), score(&same));
    }

    #[test]
    fn single_item_wardrobe() {
        // diversity = min(1/0.5, 1) = 1; balance = 0 → 60.
        assert_eq!(score(&[item("tops", &["red"])]), 60);
    }
}
