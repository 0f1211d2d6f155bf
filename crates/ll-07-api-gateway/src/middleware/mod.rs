//! Tower/axum middleware for the gateway.

pub mod cors;
pub mod metrics;

pub use cors::create_cors_layer;
pub use metrics::track_requests;
