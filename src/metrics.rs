use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("report_requests_total", "Wardrobe reports computed.");
        describe_counter!(
            "rotation_requests_total",
            "Rotation-risk batch requests served."
        );
        describe_counter!(
            "archetype_unrecognized_total",
            "Alignment requests whose archetype label resolved to nothing."
        );
        describe_histogram!(
            "wardrobe_items_per_request",
            "Item-list size per scoring request."
        );
        describe_histogram!("report_overall_score", "Overall score distribution.");
        describe_gauge!(
            "tuning_last_reload_ts",
            "Unix ts when the tuning config was last (re)loaded."
        );
    });
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder and register series descriptions.
    pub fn init() -> Self {
        // Use default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        ensure_metrics_described();

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
