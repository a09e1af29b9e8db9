use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, gauge, histogram};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::aggregate::compose_report;
use crate::archetypes::ArchetypeTable;
use crate::dimensions::{compute_metrics, rotation};
use crate::history::ReportHistory;
use crate::item::{SeasonalPalette, StyleProfile, WardrobeItem};
use crate::report::{Dimension, DimensionalMetrics, WardrobeIntelligence, WardrobeTier};
use crate::tuning::{self, TuningHandle};

#[derive(Clone)]
pub struct AppState {
    archetypes: Arc<RwLock<ArchetypeTable>>,
    tuning: TuningHandle,
    history: Arc<ReportHistory>,
}

impl AppState {
    pub fn new(archetypes: ArchetypeTable, tuning: TuningHandle) -> Self {
        Self {
            archetypes: Arc::new(RwLock::new(archetypes)),
            tuning,
            history: Arc::new(ReportHistory::with_capacity(2000)),
        }
    }

    /// Build state the way the binary does: config from env/files.
    pub fn from_env() -> Self {
        Self::new(
            ArchetypeTable::load_from_env(),
            TuningHandle::new(crate::tuning::Tuning::load()),
        )
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/report", post(report))
        .route("/dimensions", post(dimensions))
        .route("/rotation", post(rotation_batch))
        .route("/debug/history", get(debug_history))
        .route("/debug/last-report", get(debug_last_report))
        .route("/debug/archetype", get(debug_archetype))
        .route("/admin/reload-tuning", get(admin_reload_tuning))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// One wardrobe snapshot to score.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreRequest {
    #[serde(default)]
    items: Vec<WardrobeItem>,
    #[serde(default)]
    profile: Option<StyleProfile>,
    #[serde(default)]
    target_palette: Option<SeasonalPalette>,
}

/// Reports whether the archetype table came from the built-in seed or a file.
const CONFIG_SOURCE_HEADER: &str = "x-config-source";

async fn report(
    State(state): State<AppState>,
    Json(body): Json<ScoreRequest>,
) -> ([(&'static str, &'static str); 1], Json<WardrobeIntelligence>) {
    let tuning = state.tuning.current();
    let (result, source) = {
        let table = state.archetypes.read().expect("archetype table poisoned");
        (
            compose_report(
                &body.items,
                body.profile.as_ref(),
                body.target_palette,
                &table,
                &tuning,
            ),
            table.source.as_str(),
        )
    };

    counter!("report_requests_total").increment(1);
    histogram!("wardrobe_items_per_request").record(body.items.len() as f64);
    histogram!("report_overall_score").record(result.overall_score as f64);

    state.history.push(&result, body.items.len());
    dev_log_report(&body.items, &result);

    ([(CONFIG_SOURCE_HEADER, source)], Json(result))
}

async fn dimensions(
    State(state): State<AppState>,
    Json(body): Json<ScoreRequest>,
) -> Json<DimensionalMetrics> {
    let table = state.archetypes.read().expect("archetype table poisoned");
    histogram!("wardrobe_items_per_request").record(body.items.len() as f64);
    Json(compute_metrics(
        &body.items,
        body.profile.as_ref(),
        body.target_palette,
        &table,
    ))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RotationRequest {
    #[serde(default)]
    items: Vec<WardrobeItem>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RotationRisk {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    days_since_worn: Option<i64>,
    risk: f32,
}

async fn rotation_batch(
    State(state): State<AppState>,
    Json(body): Json<RotationRequest>,
) -> Json<Vec<RotationRisk>> {
    let table = state.tuning.current().rotation;
    let now = chrono::Utc::now();

    counter!("rotation_requests_total").increment(1);
    histogram!("wardrobe_items_per_request").record(body.items.len() as f64);

    let out = body
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| RotationRisk {
            index,
            days_since_worn: rotation::days_since_worn(item, now),
            risk: rotation::risk_at(item, now, &table),
        })
        .collect::<Vec<_>>();
    Json(out)
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryOut {
    ts_unix: u64,
    overall_score: u8,
    tier: WardrobeTier,
    primary_strength: Dimension,
    primary_opportunity: Dimension,
    item_count: usize,
}

impl From<crate::history::HistoryEntry> for HistoryOut {
    fn from(h: crate::history::HistoryEntry) -> Self {
        Self {
            ts_unix: h.ts_unix,
            overall_score: h.overall_score,
            tier: h.tier,
            primary_strength: h.primary_strength,
            primary_opportunity: h.primary_opportunity,
            item_count: h.item_count,
        }
    }
}

async fn debug_history(State(state): State<AppState>) -> Json<Vec<HistoryOut>> {
    let rows = state.history.snapshot_last_n(10);
    Json(rows.into_iter().map(HistoryOut::from).collect())
}

async fn debug_last_report(State(state): State<AppState>) -> Json<Option<HistoryOut>> {
    let mut rows = state.history.snapshot_last_n(1);
    Json(rows.pop().map(HistoryOut::from))
}

async fn debug_archetype(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> String {
    let label = q.get("label").cloned().unwrap_or_default();
    let table = state.archetypes.read().expect("archetype table poisoned");
    match table.resolve(&label) {
        Some(canonical) => format!(
            "label='{}' -> canonical='{}' keywords={:?}",
            label,
            canonical,
            table.keywords_for(canonical)
        ),
        None => format!("label='{}' -> unrecognized", label),
    }
}

async fn admin_reload_tuning(State(state): State<AppState>) -> String {
    match state.tuning.reload_from_disk() {
        Ok(()) => {
            gauge!("tuning_last_reload_ts").set(current_unix() as f64);
            "reloaded".to_string()
        }
        Err(e) => format!("failed: {e}"),
    }
}

fn current_unix() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Anonymized wardrobe fingerprint for dev logs: first 6 bytes of the
/// SHA-256 over category+brand pairs, hex-encoded. Raw notes never leave
/// the process.
fn anon_fingerprint(items: &[WardrobeItem]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    for it in items {
        hasher.update(it.category.as_bytes());
        if let Some(b) = &it.brand {
            hasher.update(b.as_bytes());
        }
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Minimal, anonymized dev logger for scored reports.
fn dev_log_report(items: &[WardrobeItem], result: &WardrobeIntelligence) {
    if !tuning::dev_logging_enabled() {
        return;
    }
    let id = anon_fingerprint(items);
    info!(
        target: "wardrobe",
        %id,
        items = items.len(),
        overall = result.overall_score,
        tier = ?result.tier,
        variety = result.dimensions.variety,
        seasonal = result.dimensions.seasonal_compatibility,
        archetype = result.dimensions.archetype_alignment,
        harmony = result.dimensions.color_harmony,
        "report"
    );
}
