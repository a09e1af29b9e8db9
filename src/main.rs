//! Wardrobe Intelligence Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wardrobe_intelligence::api::{self, AppState};
use wardrobe_intelligence::archetypes::ArchetypeTable;
use wardrobe_intelligence::metrics::Metrics;
use wardrobe_intelligence::tuning::{start_hot_reload_thread, Tuning, TuningHandle};

/// Compact tracing logs; RUST_LOG overrides the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wardrobe=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    // This enables TUNING_CONFIG_PATH / ARCHETYPE_KEYWORDS_PATH from .env.
    let _ = dotenvy::dotenv();

    init_tracing();

    // Prometheus recorder must be installed before the first counter tick.
    let metrics = Metrics::init();

    // --- Load scoring configuration ---
    let archetypes = ArchetypeTable::load_from_env();
    tracing::info!(source = archetypes.source.as_str(), "archetype table ready");

    let tuning = TuningHandle::new(Tuning::load());

    // If hot reload is enabled, spawn the background watcher.
    start_hot_reload_thread(tuning.clone(), Tuning::config_path());

    // Build AppState and pass it into the router.
    let state = AppState::new(archetypes, tuning);
    let router = api::create_router(state).merge(metrics.router());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "wardrobe-intelligence listening");

    axum::serve(listener, router).await?;
    Ok(())
}
