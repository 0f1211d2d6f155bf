//! Ports layer for the Ledger Store subsystem.

pub mod inbound;

pub use inbound::*;
