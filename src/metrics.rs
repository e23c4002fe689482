use std::sync::OnceLock;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus exporter and register all application metrics.
/// Idempotent: only one recorder can exist per process, so repeated calls
/// (e.g. from the test harness) return the same handle.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear before the first increment.
            counter!("flow_runs_total").absolute(0);
            counter!("flow_failures_total").absolute(0);
            counter!("trades_executed_total").absolute(0);
            counter!("suggestions_dismissed_total").absolute(0);

            gauge!("open_suggestions").set(0.0);

            // Histogram is lazily created on first record; force creation.
            histogram!("flow_latency_seconds").record(0.0);

            handle
        })
        .clone()
}
