//! Prometheus metrics for LifeLink subsystems.
//!
//! All metrics follow the naming convention: `ll_<subsystem>_<metric>_<unit>`
//!
//! Metrics are process-global. Services update them unconditionally; they
//! only become visible at `/metrics` once [`register_metrics`] has run.

use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // MATCH SEARCH (Subsystem 1)
    // =========================================================================

    /// Total recipient searches served
    pub static ref SEARCH_REQUESTS: Counter = Counter::new(
        "ll_search_requests_total",
        "Total number of recipient searches"
    ).expect("metric creation failed");

    /// Total candidates fabricated across all searches
    pub static ref SEARCH_CANDIDATES: Counter = Counter::new(
        "ll_search_candidates_total",
        "Total number of mock candidates returned"
    ).expect("metric creation failed");

    // =========================================================================
    // CONSENT FLOW (Subsystem 2)
    // =========================================================================

    /// Consent attempts by outcome (approved/rejected/cancelled)
    pub static ref CONSENT_ATTEMPTS: CounterVec = CounterVec::new(
        Opts::new("ll_consent_attempts_total", "Consent attempts by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    // =========================================================================
    // DONOR REGISTRATION (Subsystem 3)
    // =========================================================================

    /// Registration submissions by outcome (accepted/rejected/invalid)
    pub static ref REGISTRATIONS: CounterVec = CounterVec::new(
        Opts::new("ll_registrations_total", "Registration submissions by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Wallet connections
    pub static ref WALLET_CONNECTIONS: Counter = Counter::new(
        "ll_wallet_connections_total",
        "Total simulated wallet connections"
    ).expect("metric creation failed");

    // =========================================================================
    // LEDGER STORE (Subsystem 4)
    // =========================================================================

    /// Records currently held by the mock ledger
    pub static ref LEDGER_RECORDS: Gauge = Gauge::new(
        "ll_ledger_records",
        "Number of records in the mock ledger"
    ).expect("metric creation failed");

    // =========================================================================
    // SIMULATION
    // =========================================================================

    /// Simulated delay per stage
    pub static ref SIMULATED_DELAY: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "ll_simulated_delay_seconds",
            "Simulated waits requested per stage"
        ).buckets(vec![0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0]),
        &["stage"]
    ).expect("metric creation failed");

    // =========================================================================
    // API GATEWAY (Subsystem 7)
    // =========================================================================

    /// HTTP requests by route
    pub static ref API_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("ll_api_requests_total", "HTTP requests by route"),
        &["route"]
    ).expect("metric creation failed");
}

/// Register every metric with [`REGISTRY`].
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SEARCH_REQUESTS.clone()),
        Box::new(SEARCH_CANDIDATES.clone()),
        Box::new(CONSENT_ATTEMPTS.clone()),
        Box::new(REGISTRATIONS.clone()),
        Box::new(WALLET_CONNECTIONS.clone()),
        Box::new(LEDGER_RECORDS.clone()),
        Box::new(SIMULATED_DELAY.clone()),
        Box::new(API_REQUESTS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record a simulated wait for `stage`.
pub fn observe_delay(stage: &str, delay: std::time::Duration) {
    SIMULATED_DELAY
        .with_label_values(&[stage])
        .observe(delay.as_secs_f64());
}
