//! # LifeLink
//!
//! Demo back end for an organ donor/recipient matching platform.

use std::sync::Arc;

use anyhow::{Context, Result};
use ll_runtime::{LifeLinkRuntime, RuntimeConfig};
use ll_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let config = RuntimeConfig::from_env().context("invalid configuration")?;
    config.validate().context("invalid configuration")?;

    let runtime = Arc::new(LifeLinkRuntime::new(config));

    let signal = runtime.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C"),
            Err(e) => {
                error!(error = %e, "Failed to listen for Ctrl+C");
                return;
            }
        }
        signal.shutdown();
    });

    info!("LifeLink is running. Press Ctrl+C to stop.");
    runtime.run().await
}
