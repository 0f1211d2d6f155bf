//! # Domain Layer - API Gateway

pub mod config;
pub mod error;
pub mod site;
pub mod views;
