// src/tuning.rs
//! Scoring tuning tables: dimension weights, tier cutoffs, and the
//! rotation-risk step table. Loaded from TOML, hardened against odd values,
//! hot-reloadable in dev.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

use crate::report::WardrobeTier;

// --- env defaults & names ---
pub const DEFAULT_TUNING_PATH: &str = "config/tuning.toml";
pub const ENV_TUNING_PATH: &str = "TUNING_CONFIG_PATH";

/// Dev logging gate: WARDROBE_DEV_LOG=1 AND dev env (debug or APP_ENV in {local,development,dev}).
pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var("WARDROBE_DEV_LOG").ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    is_dev_env()
}

fn is_dev_env() -> bool {
    matches!(
        std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Per-dimension weights for the overall score (relative, not normalized).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub variety: f32,
    pub seasonal_compatibility: f32,
    pub archetype_alignment: f32,
    pub color_harmony: f32,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            variety: 1.0,
            seasonal_compatibility: 1.0,
            archetype_alignment: 1.0,
            color_harmony: 1.0,
        }
    }
}

impl DimensionWeights {
    fn sum(&self) -> f32 {
        self.variety + self.seasonal_compatibility + self.archetype_alignment + self.color_harmony
    }

    fn is_sane(&self) -> bool {
        let vals = [
            self.variety,
            self.seasonal_compatibility,
            self.archetype_alignment,
            self.color_harmony,
        ];
        vals.iter().all(|v| v.is_finite() && *v >= 0.0) && self.sum() > 0.0
    }
}

/// Overall-score cutoffs for the four tiers. A score below `balanced` is
/// MINIMAL; at or above `expert` is EXPERT.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TierCutoffs {
    pub balanced: u8,
    pub diverse: u8,
    pub expert: u8,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            balanced: 40,
            diverse: 60,
            expert: 80,
        }
    }
}

impl TierCutoffs {
    pub fn tier_for(&self, overall: u8) -> WardrobeTier {
        if overall < self.balanced {
            WardrobeTier::Minimal
        } else if overall < self.diverse {
            WardrobeTier::Balanced
        } else if overall < self.expert {
            WardrobeTier::Diverse
        } else {
            WardrobeTier::Expert
        }
    }

    fn is_sane(&self) -> bool {
        self.balanced < self.diverse && self.diverse < self.expert && self.expert <= 100
    }
}

/// One step of the rotation-risk table: applies while
/// `days_since_worn < max_days`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RotationStep {
    pub max_days: i64,
    pub risk: f32,
}

/// Day-threshold table mapping staleness to rotation risk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RotationTable {
    pub steps: Vec<RotationStep>,
    /// Risk once every step is exceeded.
    pub beyond_risk: f32,
    /// Risk for items that were never worn at all.
    pub never_worn_risk: f32,
}

impl Default for RotationTable {
    fn default() -> Self {
        Self {
            steps: vec![
                RotationStep { max_days: 30, risk: 0.0 },
                RotationStep { max_days: 60, risk: 0.2 },
                RotationStep { max_days: 90, risk: 0.5 },
                RotationStep { max_days: 180, risk: 0.75 },
            ],
            beyond_risk: 0.95,
            never_worn_risk: 0.9,
        }
    }
}

impl RotationTable {
    /// Risk for a worn item given whole days since it was last worn.
    pub fn risk_for_days(&self, days: i64) -> f32 {
        for step in &self.steps {
            if days < step.max_days {
                return step.risk;
            }
        }
        self.beyond_risk
    }

    fn is_sane(&self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        let clamped = |r: f32| r.is_finite() && (0.0..=1.0).contains(&r);
        if !clamped(self.beyond_risk) || !clamped(self.never_worn_risk) {
            return false;
        }
        // Thresholds strictly increasing, risks non-decreasing.
        self.steps.windows(2).all(|w| {
            w[0].max_days < w[1].max_days && w[0].risk <= w[1].risk
        }) && self.steps.iter().all(|s| s.max_days > 0 && clamped(s.risk))
    }
}

/// Root tuning config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub weights: DimensionWeights,
    pub tiers: TierCutoffs,
    pub rotation: RotationTable,
}

impl Tuning {
    /// Parse from a TOML string and harden each section back to defaults if
    /// it fails validation.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let mut t: Tuning = toml::from_str(toml_str)?;
        if !t.weights.is_sane() {
            warn!("tuning: weights failed validation; using defaults");
            t.weights = DimensionWeights::default();
        }
        if !t.tiers.is_sane() {
            warn!("tuning: tier cutoffs failed validation; using defaults");
            t.tiers = TierCutoffs::default();
        }
        if !t.rotation.is_sane() {
            warn!("tuning: rotation table failed validation; using defaults");
            t.rotation = RotationTable::default();
        }
        Ok(t)
    }

    /// Resolve the config path from `TUNING_CONFIG_PATH` (default
    /// `config/tuning.toml`).
    pub fn config_path() -> PathBuf {
        std::env::var(ENV_TUNING_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TUNING_PATH))
    }

    /// Load from disk; a missing or malformed file yields defaults with a
    /// warning rather than a startup failure.
    pub fn load() -> Self {
        let path = Self::config_path();
        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(t) => {
                    info!(path = %path.display(), "tuning loaded");
                    t
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid tuning file; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no tuning file; using defaults");
                Self::default()
            }
        }
    }
}

/* ----------------------------
Thread-safe handle + hot reload
---------------------------- */

/// A threadsafe handle that can hot-reload the underlying tuning in dev.
/// - Enable by setting WARDROBE_HOT_RELOAD=1
/// - Dev-gated: active only if cfg!(debug_assertions) OR APP_ENV is "local"/"development"/"dev".
#[derive(Clone)]
pub struct TuningHandle {
    inner: Arc<RwLock<Tuning>>,
}

impl TuningHandle {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tuning)),
        }
    }

    /// Snapshot of the current tuning.
    pub fn current(&self) -> Tuning {
        self.inner
            .read()
            .map(|g| g.clone())
            .unwrap_or_default()
    }

    /// Re-read the tuning file and swap it in atomically.
    pub fn reload_from_disk(&self) -> anyhow::Result<()> {
        let path = Tuning::config_path();
        let content = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("failed to read tuning config at {}: {}", path.display(), e)
        })?;
        let fresh = Tuning::from_toml_str(&content)?;
        let mut guard = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("tuning lock poisoned"))?;
        *guard = fresh;
        Ok(())
    }
}

/// Returns true if we should enable hot reload (dev/local only).
fn hot_reload_enabled() -> bool {
    let want = std::env::var("WARDROBE_HOT_RELOAD")
        .ok()
        .map(|v| v == "1")
        .unwrap_or(false);
    if !want {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    is_dev_env()
}

/// Start a simple polling watcher on `path` to hot-reload into `handle`.
/// Polls mtime every 2s. Uses only std, no external deps.
pub fn start_hot_reload_thread(handle: TuningHandle, path: PathBuf) {
    if !hot_reload_enabled() {
        return;
    }

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let mut last_mtime: Option<SystemTime> = None;

        loop {
            match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(mtime) => {
                    let changed = match last_mtime {
                        None => {
                            last_mtime = Some(mtime);
                            false
                        }
                        Some(prev) => mtime > prev,
                    };
                    if changed {
                        if handle.reload_from_disk().is_ok() {
                            info!(path = %path.display(), "tuning hot-reloaded");
                        }
                        last_mtime = Some(mtime);
                    }
                }
                Err(_) => {
                    // File missing or unreadable; keep trying.
                }
            }
            thread::sleep(poll);
        }
    });
}
