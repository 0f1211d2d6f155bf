//! # LifeLink Runtime
//!
//! Wires every LifeLink subsystem around one in-memory event bus and serves
//! the REST gateway.
//!
//! ## Modular Structure
//!
//! - `container/` - configuration and subsystem construction
//! - `wiring/` - event bus listeners
//!
//! ## Startup Sequence
//!
//! 1. Load `RuntimeConfig` from the environment and validate it
//! 2. Initialize telemetry (tracing subscriber + Prometheus registry)
//! 3. Build the `AppContainer`
//! 4. Spawn the event router
//! 5. Serve the gateway until Ctrl+C, then stop both through a `watch` channel

pub mod container;
pub mod wiring;

use ll_07_api_gateway::ApiGatewayService;
use tokio::sync::watch;
use tracing::{info, warn};

pub use container::{AppContainer, ConfigError, RuntimeConfig};

/// The assembled application.
pub struct LifeLinkRuntime {
    container: AppContainer,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl LifeLinkRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            container: AppContainer::new(config),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn container(&self) -> &AppContainer {
        &self.container
    }

    /// Serve until [`LifeLinkRuntime::shutdown`] is called or the listener fails.
    pub async fn run(&self) -> anyhow::Result<()> {
        let router = wiring::spawn_event_router(
            &self.container.bus,
            self.container.consent.clone(),
            self.shutdown_rx.clone(),
        );

        let gateway =
            ApiGatewayService::new(self.container.config.gateway(), self.container.app_state())?;

        info!("===========================================");
        info!("  LifeLink v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");
        info!(addr = %self.container.config.http_addr, "REST API");
        info!(data_dir = %self.container.config.data_dir.display(), "Preferences");

        let mut shutdown = self.shutdown_rx.clone();
        let served = gateway
            .run(async move {
                let _ = shutdown.wait_for(|stop| *stop).await;
            })
            .await;

        // The gateway may also stop on its own error; make sure the router follows.
        self.shutdown_tx.send_replace(true);
        if let Err(e) = router.await {
            warn!(error = %e, "Event router task failed");
        }

        served?;
        Ok(())
    }

    /// Signal every task to stop.
    pub fn shutdown(&self) {
        info!("Shutting down");
        self.shutdown_tx.send_replace(true);
    }
}
