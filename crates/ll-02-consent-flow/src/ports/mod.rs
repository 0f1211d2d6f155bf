//! # Ports Layer - Consent Flow

pub mod inbound;
