//! # Integration Scenarios

pub mod registration_flow;
pub mod runtime_wiring;
pub mod search_flow;
