//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - HTTP request counts by method, path, and status
//! - HTTP request latency histograms
//! - Online user and present session gauges
//! - Presence action and idle eviction counters

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

const NAMESPACE: &str = "presence_server";

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request counter - tracks total requests by method, path, and status code
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests").namespace(NAMESPACE),
        &["method", "path", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

/// HTTP request latency histogram - tracks request duration in seconds
pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0];
    HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        )
        .namespace(NAMESPACE)
        .buckets(buckets),
        &["method", "path"],
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric")
});

/// Distinct users with at least one present session
pub static PRESENCE_ONLINE_USERS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::with_opts(
        Opts::new(
            "presence_online_users",
            "Number of distinct users with a present session",
        )
        .namespace(NAMESPACE),
    )
    .expect("Failed to create PRESENCE_ONLINE_USERS metric")
});

/// Present sessions
pub static PRESENCE_SESSIONS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::with_opts(
        Opts::new("presence_sessions", "Number of present sessions").namespace(NAMESPACE),
    )
    .expect("Failed to create PRESENCE_SESSIONS metric")
});

/// Applied presence actions by kind
pub static PRESENCE_ACTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("presence_actions_total", "Total number of applied presence actions")
            .namespace(NAMESPACE),
        &["action"], // "join", "heartbeat", "leave"
    )
    .expect("Failed to create PRESENCE_ACTIONS_TOTAL metric")
});

/// Sessions removed for inactivity
pub static PRESENCE_EVICTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new(
            "presence_evictions_total",
            "Total number of sessions evicted for inactivity",
        )
        .namespace(NAMESPACE),
    )
    .expect("Failed to create PRESENCE_EVICTIONS_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("Failed to register HTTP_REQUESTS_TOTAL");
    registry
        .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
        .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");
    registry
        .register(Box::new(PRESENCE_ONLINE_USERS.clone()))
        .expect("Failed to register PRESENCE_ONLINE_USERS");
    registry
        .register(Box::new(PRESENCE_SESSIONS.clone()))
        .expect("Failed to register PRESENCE_SESSIONS");
    registry
        .register(Box::new(PRESENCE_ACTIONS_TOTAL.clone()))
        .expect("Failed to register PRESENCE_ACTIONS_TOTAL");
    registry
        .register(Box::new(PRESENCE_EVICTIONS_TOTAL.clone()))
        .expect("Failed to register PRESENCE_EVICTIONS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Helper to record HTTP request metrics
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

/// Helper to publish the current presence counts
pub fn set_presence_counts(online_users: usize, sessions: usize) {
    PRESENCE_ONLINE_USERS.set(online_users as i64);
    PRESENCE_SESSIONS.set(sessions as i64);
}

/// Helper to count an applied presence action
pub fn record_presence_action(action: &str) {
    PRESENCE_ACTIONS_TOTAL.with_label_values(&[action]).inc();
}

/// Helper to count idle evictions
pub fn record_evictions(count: usize) {
    if count > 0 {
        PRESENCE_EVICTIONS_TOTAL.inc_by(count as u64);
    }
}
