//! # Archetype Keyword Table
//!
//! Configurable mapping from style archetypes (e.g. "classic",
//! "urban-minimalist") to the keyword sets used by alignment scoring.
//!
//! - Loads from JSON config (keywords + aliases).
//! - Case-insensitive lookup with normalization of punctuation, dashes, etc.
//! - Aliases map alternative labels ("minimalist", "sport") to canonical
//!   archetypes.
//! - Fallback order: aliases → exact match → fuzzy match → unknown.
//! - Includes a built-in `default_seed()` with the five stock archetypes.
//!
//! Designed to be simple, testable, and resilient to noisy input.

use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};
use strsim::normalized_levenshtein;

pub const DEFAULT_KEYWORDS_PATH: &str = "archetype_keywords.json";
pub const ENV_KEYWORDS_PATH: &str = "ARCHETYPE_KEYWORDS_PATH";

/// Minimum similarity for the fuzzy fallback ("clasic" → "classic").
const FUZZY_MIN_SIMILARITY: f64 = 0.85;

/// Where the active table came from; surfaced in the `X-Config-Source`
/// response header for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Seed,
    File,
}

impl TableSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableSource::Seed => "seed",
            TableSource::File => "file",
        }
    }
}

/// Keyword table, loaded from JSON or seeded defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeTable {
    /// Canonical archetype → keyword list.
    #[serde(default)]
    pub keywords: HashMap<String, Vec<String>>,
    /// Aliases mapping non-canonical labels → canonical archetypes.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    #[serde(skip, default = "seed_source")]
    pub source: TableSource,
}

fn seed_source() -> TableSource {
    TableSource::Seed
}

impl ArchetypeTable {
    /// Load from the path in `ARCHETYPE_KEYWORDS_PATH`, defaulting to
    /// `archetype_keywords.json`. Falls back to `default_seed()` on any error.
    pub fn load_from_env() -> Self {
        let path = std::env::var(ENV_KEYWORDS_PATH)
            .unwrap_or_else(|_| DEFAULT_KEYWORDS_PATH.to_string());
        Self::load_from_file(path)
    }

    /// Load from a JSON file.
    /// Falls back to `default_seed()` on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<ArchetypeTable>(&s) {
                Ok(mut table) => {
                    table.source = TableSource::File;
                    table.normalize_keys();
                    table
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.as_ref().display(),
                        error = %e,
                        "invalid archetype keyword file; using built-in seed"
                    );
                    Self::default_seed()
                }
            },
            Err(_) => Self::default_seed(),
        }
    }

    /// Resolve a free-text archetype label to its canonical name.
    ///
    /// Steps:
    /// 1. Alias lookup (normalized) → canonical.
    /// 2. Exact match against canonical names.
    /// 3. Fuzzy match (normalized Levenshtein ≥ 0.85) against canonical
    ///    names and aliases; best score wins.
    /// 4. `None` — the caller treats the archetype as unrecognized.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        let s = normalize(label);
        if s.is_empty() {
            return None;
        }

        // 1) Alias resolution.
        if let Some(canon) = self.aliases.get(&s) {
            if let Some((k, _)) = self.keywords.get_key_value(canon.as_str()) {
                return Some(k.as_str());
            }
        }

        // 2) Exact match.
        if let Some((k, _)) = self.keywords.get_key_value(s.as_str()) {
            return Some(k.as_str());
        }

        // 3) Fuzzy fallback over canonical names and aliases.
        let mut best: Option<(&str, f64)> = None;
        for k in self.keywords.keys() {
            let sim = normalized_levenshtein(&s, k);
            if sim >= FUZZY_MIN_SIMILARITY && best.map(|(_, b)| sim > b).unwrap_or(true) {
                best = Some((k.as_str(), sim));
            }
        }
        for (alias, canon) in &self.aliases {
            let sim = normalized_levenshtein(&s, alias);
            if sim >= FUZZY_MIN_SIMILARITY && best.map(|(_, b)| sim > b).unwrap_or(true) {
                if let Some((k, _)) = self.keywords.get_key_value(canon.as_str()) {
                    best = Some((k.as_str(), sim));
                }
            }
        }
        best.map(|(k, _)| k)
    }

    /// Keywords for a resolved canonical archetype (empty slice if absent).
    pub fn keywords_for(&self, canonical: &str) -> &[String] {
        self.keywords
            .get(canonical)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Built-in seed with the five stock archetypes.
    /// Used as fallback if no config is found.
    pub fn default_seed() -> Self {
        let mut keywords = HashMap::new();
        let mut aliases = HashMap::new();

        for (k, words) in [
            (
                "urban-minimalist",
                vec!["minimal", "clean", "monochrome", "black", "grey", "tailored"],
            ),
            (
                "classic",
                vec!["timeless", "structured", "navy", "white", "cream"],
            ),
            (
                "bohemian",
                vec!["flowy", "floral", "fringe", "earthy", "embroidered"],
            ),
            (
                "sporty",
                vec!["athletic", "jersey", "mesh", "track", "performance"],
            ),
            (
                "romantic",
                vec!["lace", "ruffle", "silk", "blush", "soft"],
            ),
        ] {
            keywords.insert(
                normalize(k),
                words.into_iter().map(str::to_string).collect(),
            );
        }

        for (a, c) in [
            ("minimalist", "urban-minimalist"),
            ("urban minimal", "urban-minimalist"),
            ("minimal", "urban-minimalist"),
            ("timeless classic", "classic"),
            ("preppy", "classic"),
            ("boho", "bohemian"),
            ("bohème", "bohemian"),
            ("sport", "sporty"),
            ("athleisure", "sporty"),
            ("athletic", "sporty"),
            ("feminine", "romantic"),
            ("soft romantic", "romantic"),
        ] {
            aliases.insert(normalize(a), normalize(c));
        }

        Self {
            keywords,
            aliases,
            source: TableSource::Seed,
        }
    }

    /// Normalize all keys in place so file-provided tables match lookups.
    fn normalize_keys(&mut self) {
        self.keywords = std::mem::take(&mut self.keywords)
            .into_iter()
            .map(|(k, v)| {
                (
                    normalize(&k),
                    v.into_iter().map(|w| w.to_lowercase()).collect(),
                )
            })
            .collect();
        self.aliases = std::mem::take(&mut self.aliases)
            .into_iter()
            .map(|(a, c)| (normalize(&a), normalize(&c)))
            .collect();
    }
}

/// Normalize input: lowercase, replace separators/dashes with spaces,
/// collapse multiple spaces into one.
pub fn normalize(s: &str) -> String {
    let mut out = s.trim().to_lowercase();

    // Replace common separators with spaces.
    for ch in ['—', '–', '-', '_', '/', '\\'] {
        out = out.replace(ch, " ");
    }

    // Replace disruptive punctuation/whitespace with spaces.
    out = out.replace(['\n', '\r', '\t', '.', ',', '\''], " ");

    // Collapse multiple spaces.
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
