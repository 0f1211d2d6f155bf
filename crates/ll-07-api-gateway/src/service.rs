//! API Gateway service - binds the listener and serves the router.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::{build_router, AppState};

pub struct ApiGatewayService {
    config: GatewayConfig,
    router: Router,
}

impl ApiGatewayService {
    /// Validate `config` and build the router over `state`.
    pub fn new(config: GatewayConfig, state: AppState) -> Result<Self, GatewayError> {
        config.validate()?;
        let router = build_router(state, &config.cors);
        Ok(Self { config, router })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Router without a listener, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.http_addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        info!(%addr, "Starting HTTP server");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
