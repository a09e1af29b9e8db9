// tests/wardrobe_synthetic.rs
//
// Deterministic synthetic suite: generate a spread of wardrobes with a tiny
// LCG (no dev-deps) and hold every scoring invariant across them.

use std::collections::HashMap;

use wardrobe_intelligence::archetypes::ArchetypeTable;
use wardrobe_intelligence::dimensions::{archetype, harmony, seasonal, variety};
use wardrobe_intelligence::tuning::Tuning;
use wardrobe_intelligence::{compose_report, SeasonalPalette, StyleProfile, WardrobeItem};

/// Deterministic pseudo-RNG (LCG) so we don't add any dev-deps.
struct Lcg(u64);
impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_usize(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 32) as usize) % n.max(1)
    }
    fn next_f32(&mut self) -> f32 {
        self.next_usize(10_000) as f32 / 10_000.0
    }
}

const CATEGORIES: &[&str] = &[
    "tops", "jeans", "skirt", "sneakers", "boots", "blazer", "dress", "accessories",
];
const COLORS: &[&str] = &[
    "black", "white", "navy", "cream", "olive", "rust", "blush", "teal", "grey", "mustard",
];
const PALETTES: &[SeasonalPalette] = &[
    SeasonalPalette::LightSpring,
    SeasonalPalette::SoftSummer,
    SeasonalPalette::DarkAutumn,
    SeasonalPalette::TrueWinter,
];
const ARCHETYPES: &[&str] = &["classic", "boho", "sporty", "avant-garde", ""];

fn synth_item(rng: &mut Lcg) -> WardrobeItem {
    let mut it = WardrobeItem::new(CATEGORIES[rng.next_usize(CATEGORIES.len())]);

    let color_count = rng.next_usize(4);
    for _ in 0..color_count {
        it.colors.push(COLORS[rng.next_usize(COLORS.len())].to_string());
    }

    if rng.next_usize(2) == 0 {
        let mut scores: HashMap<SeasonalPalette, f32> = HashMap::new();
        for p in PALETTES {
            if rng.next_usize(2) == 0 {
                scores.insert(*p, rng.next_f32());
            }
        }
        it.seasonal_palette_scores = Some(scores);
    }
    if rng.next_usize(3) == 0 {
        it.notes = Some("timeless tailored staple".to_string());
    }
    it
}

fn synth_wardrobe(rng: &mut Lcg, size: usize) -> Vec<WardrobeItem> {
    (0..size).map(|_| synth_item(rng)).collect()
}

#[test]
fn synthetic_suite_holds_all_invariants() {
    let table = ArchetypeTable::default_seed();
    let tuning = Tuning::default();
    let mut rng = Lcg::new(0x5EED_CAFE_2026_0808);

    let mut checked = 0usize;
    for round in 0..200 {
        let size = rng.next_usize(16);
        let items = synth_wardrobe(&mut rng, size);

        let profile_label = ARCHETYPES[rng.next_usize(ARCHETYPES.len())];
        let profile = (!profile_label.is_empty()).then(|| StyleProfile {
            archetype: profile_label.to_string(),
        });
        let target = if rng.next_usize(2) == 0 {
            Some(PALETTES[rng.next_usize(PALETTES.len())])
        } else {
            None
        };

        let r = compose_report(&items, profile.as_ref(), target, &table, &tuning);

        // Every score stays in range.
        for score in [
            r.overall_score,
            r.dimensions.variety,
            r.dimensions.seasonal_compatibility,
            r.dimensions.archetype_alignment,
            r.dimensions.color_harmony,
        ] {
            assert!(score <= 100, "round {round}: score out of range: {score}");
        }

        // Overall (weighted mean, equal weights) lies within the dimension span.
        let dims = [
            r.dimensions.variety,
            r.dimensions.seasonal_compatibility,
            r.dimensions.archetype_alignment,
            r.dimensions.color_harmony,
        ];
        let lo = *dims.iter().min().unwrap();
        let hi = *dims.iter().max().unwrap();
        assert!(
            (lo..=hi).contains(&r.overall_score),
            "round {round}: overall {} outside [{lo}, {hi}]",
            r.overall_score
        );

        // Tier agrees with the cutoffs.
        assert_eq!(r.tier, tuning.tiers.tier_for(r.overall_score));

        // Strength is never weaker than opportunity.
        assert!(
            r.dimensions.get(r.insights.primary_strength)
                >= r.dimensions.get(r.insights.primary_opportunity),
            "round {round}: strength below opportunity"
        );

        // Idempotence: identical input, identical output.
        let again = compose_report(&items, profile.as_ref(), target, &table, &tuning);
        assert_eq!(r, again, "round {round}: not idempotent");

        // Documented empty-input defaults.
        if items.is_empty() {
            assert_eq!(r.dimensions.variety, 0);
            assert_eq!(r.dimensions.color_harmony, 50);
        }

        // Dimension scorers agree with the composed report.
        assert_eq!(r.dimensions.variety, variety::score(&items));
        assert_eq!(r.dimensions.color_harmony, harmony::score(&items));
        assert_eq!(
            r.dimensions.seasonal_compatibility,
            seasonal::score(&items, target)
        );
        assert_eq!(
            r.dimensions.archetype_alignment,
            archetype::score(&items, profile.as_ref(), &table)
        );

        checked += 1;
    }

    assert_eq!(checked, 200);
}

#[test]
fn no_target_palette_always_neutralizes_seasonal() {
    let mut rng = Lcg::new(42);
    for size in [0usize, 1, 3, 9] {
        let items = synth_wardrobe(&mut rng, size);
        assert_eq!(seasonal::score(&items, None), 50, "size {size}");
    }
}
