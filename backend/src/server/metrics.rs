//! Prometheus request metrics exposed at `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Build the request metrics middleware under the `blog` namespace.
///
/// # Errors
/// Returns [`std::io::Error`] when the default registry rejects the metrics.
pub(crate) fn prometheus_middleware() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("blog")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}")))
}
