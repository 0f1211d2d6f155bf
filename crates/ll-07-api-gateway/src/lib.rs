//! # API Gateway Subsystem
//!
//! **Subsystem ID:** 7
//!
//! REST surface for the LifeLink demo. Every route delegates to one
//! subsystem's inbound port; the gateway itself holds no domain state.
//!
//! ## Architecture
//!
//! ```text
//! HTTP → CORS → TraceLayer → request metrics → handler → subsystem port
//! ```
//!
//! ## Error Mapping
//!
//! | Failure | Status |
//! |---------|--------|
//! | Form validation | 400 |
//! | Unknown candidate / record | 404 |
//! | Invalid transition, submission in flight, wallet missing | 409 |
//! | Simulated contract rejection | 422 |
//! | Storage / metrics encoding | 500 |
//!
//! Error bodies are `{ "error": { "code": ..., "message": ... } }`.

pub mod adapters;
pub mod domain;
mod handlers;
pub mod middleware;
mod router;
pub mod service;

pub use domain::config::{CorsConfig, GatewayConfig};
pub use domain::error::{ApiError, GatewayError};
pub use domain::site::SiteInfo;
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;
