//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{COMPOSE_REJECTED_TOTAL, COMPOSE_TOTAL, DISPATCH_LATENCY, DISPATCH_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording compose metrics
pub struct ComposeMetrics;

impl ComposeMetrics {
    /// Record a compose call; empty template ids are labelled `none`
    pub fn record_composed(template_id: &str) {
        let label = if template_id.is_empty() { "none" } else { template_id };
        COMPOSE_TOTAL.with_label_values(&[label]).inc();
    }

    /// Record a rejected input
    pub fn record_rejected(reason: &str) {
        COMPOSE_REJECTED_TOTAL.with_label_values(&[reason]).inc();
    }
}

/// Helper struct for recording dispatch metrics
pub struct DispatchMetrics;

impl DispatchMetrics {
    pub fn record_success(elapsed: Duration) {
        DISPATCH_TOTAL.with_label_values(&["success"]).inc();
        DISPATCH_LATENCY.observe(elapsed.as_secs_f64());
    }

    pub fn record_failure(elapsed: Duration) {
        DISPATCH_TOTAL.with_label_values(&["failure"]).inc();
        DISPATCH_LATENCY.observe(elapsed.as_secs_f64());
    }
}
