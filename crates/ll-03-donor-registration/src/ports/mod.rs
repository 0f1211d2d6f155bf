//! # Ports Layer - Donor Registration

pub mod inbound;
pub mod outbound;
