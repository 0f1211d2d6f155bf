//! # Event Wiring
//!
//! Background tasks that react to the shared event bus.

pub mod event_routing;

pub use event_routing::{route_event, spawn_event_router, RouteAction};
