//! Metric names and the Prometheus recorder.
//!
//! Recording goes through the `metrics` macros directly; without an installed
//! recorder they are no-ops, which is what tests and the `run` command get.

use std::fmt;
use std::sync::OnceLock;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RunsTotal,
    RunErrors,
    RunDuration,
    ClassifierFallbacks,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RunsTotal => "rube_goldberg_runs_total",
            MetricName::RunErrors => "rube_goldberg_run_errors_total",
            MetricName::RunDuration => "rube_goldberg_run_duration_seconds",
            MetricName::ClassifierFallbacks => "rube_goldberg_classifier_fallbacks_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [RunsTotal, RunErrors, RunDuration, ClassifierFallbacks].into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static METRICS_HANDLE: OnceLock<metrics_exporter_prometheus::PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call once per process.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    METRICS_HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Prometheus text exposition, empty when no recorder is installed.
pub fn render() -> String {
    METRICS_HANDLE.get().map(|h| h.render()).unwrap_or_default()
}
