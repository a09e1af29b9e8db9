// src/dimensions/harmony.rs
//! Color harmony: palette breadth blended with how evenly colors are spread
//! across the wardrobe.

use std::collections::HashMap;

use crate::item::{item_colors, WardrobeItem};

/// Too few items to judge harmony at all.
pub const INSUFFICIENT_DATA_SCORE: u8 = 50;
/// Flat penalty for a near-monochromatic wardrobe.
pub const MONOCHROME_SCORE: u8 = 30;

/// Breadth maxes out once the wardrobe spans this many distinct colors.
const BREADTH_TARGET: f32 = 10.0;
const BREADTH_POINTS: f32 = 70.0;
const EVENNESS_POINTS: f32 = 30.0;

/// Color harmony in [0, 100].
pub fn score(items: &[WardrobeItem]) -> u8 {
    if items.len() < 2 {
        return INSUFFICIENT_DATA_SCORE;
    }

    // Occurrences per color, counted once per item.
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    for item in items {
        for c in item_colors(item) {
            *occurrences.entry(c).or_insert(0) += 1;
        }
    }

    let distinct = occurrences.len();
    if distinct < 3 {
        return MONOCHROME_SCORE;
    }

    let total = items.len() as f32;
    let dominant = occurrences.values().copied().max().unwrap_or(0) as f32;
    let dominant_share = (dominant / total).clamp(0.0, 1.0);

    let breadth = (distinct as f32 / BREADTH_TARGET).min(1.0) * BREADTH_POINTS;
    let evenness = (1.0 - dominant_share) * EVENNESS_POINTS;

    (breadth + evenness).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(colors: &[&str]) -> WardrobeItem {
        let mut it = WardrobeItem::new("tops");
        it.colors = colors.iter().map(|c| c.to_string()).collect();
        it
    }

    #[test]
    fn fewer_than_two_items_is_insufficient_data() {
        assert_eq!(score(&[]), 50);
        assert_eq!(score(&[item(&["red", "blue", "green"])]), 50);
    }

    #[test]
    fn two_distinct_colors_takes_the_monochrome_penalty() {
        let items = vec![item(&["black"]), item(&["white"]), item(&["black"])];
        assert_eq!(score(&items), 30);
    }

    #[test]
    fn broad_even_palette_scores_high() {
        let items: Vec<_> = [
            "red", "blue", "green", "mustard", "teal", "plum", "rust", "sage", "cobalt", "sand",
        ]
        .iter()
        .map(|c| item(&[c]))
        .collect();
        // breadth 70 (10 colors), dominant share 1/10 → evenness 27.
        assert_eq!(score(&items), 97);
    }

    #[test]
    fn dominant_color_drags_the_evenness_factor() {
        let items = vec![
            item(&["black"]),
            item(&["black"]),
            item(&["black"]),
            item(&["red"]),
            item(&["olive"]),
        ];
        // 3 distinct → breadth 21; dominant 3/5 → evenness 12.
        assert_eq!(score(&items), 33);
    }

    #[test]
    fn within_item_duplicates_count_once() {
        let items = vec![item(&["black", "black", "red", "olive"]), item(&["black"])];
        // occurrences: black 2, red 1, olive 1; dominant share 2/2 = 1.0.
        // breadth = 3/10*70 = 21; evenness 0 → 21.
        assert_eq!(score(&items), 21);
    }
}
