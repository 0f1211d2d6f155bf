//! # LifeLink Telemetry
//!
//! Structured logging (`tracing` + `tracing-subscriber`) and Prometheus
//! metrics for every LifeLink subsystem.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ll_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LL_LOG_LEVEL` | `info` | Log level filter |
//! | `LL_JSON_LOGS` | `false` | JSON log lines |
//! | `LL_SERVICE_NAME` | `lifelink` | Service name in logs |

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, observe_delay, register_metrics, API_REQUESTS, CONSENT_ATTEMPTS,
    LEDGER_RECORDS, REGISTRATIONS, SEARCH_CANDIDATES, SEARCH_REQUESTS, SIMULATED_DELAY,
    WALLET_CONNECTIONS,
};
pub use tracing_setup::{build_env_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and register metrics.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_tracing(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
