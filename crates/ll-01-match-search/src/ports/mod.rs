//! # Ports Layer - Match Search

pub mod inbound;
