//! Prometheus metrics for the order email service.
//!
//! - Compose metrics (templates chosen, rejected inputs)
//! - Dispatch metrics (outcomes, endpoint latency)

mod helpers;

pub use helpers::{encode_metrics, ComposeMetrics, DispatchMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "order_email";

lazy_static! {
    /// Compose calls by resolved template (`none` when no email applies)
    pub static ref COMPOSE_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_compose_total", METRIC_PREFIX),
        "Total compose calls by resolved template",
        &["template"]
    ).unwrap();

    /// Compose calls rejected before dispatch
    pub static ref COMPOSE_REJECTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_compose_rejected_total", METRIC_PREFIX),
        "Total compose calls rejected by reason",
        &["reason"]
    ).unwrap();

    /// Dispatch attempts by outcome
    pub static ref DISPATCH_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_dispatch_total", METRIC_PREFIX),
        "Total dispatch attempts by outcome",
        &["outcome"]
    ).unwrap();

    /// Time spent waiting on the email endpoint
    pub static ref DISPATCH_LATENCY: Histogram = register_histogram!(
        format!("{}_dispatch_latency_seconds", METRIC_PREFIX),
        "Email endpoint latency in seconds",
        vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    ).unwrap();
}
