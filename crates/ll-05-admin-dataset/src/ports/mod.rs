//! # Ports Layer - Admin Dataset

pub mod inbound;
