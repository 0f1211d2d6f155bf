//! # Ports Layer - Preferences

pub mod inbound;
pub mod outbound;
