//! Adapters - conversions from subsystem errors into HTTP errors.

mod error_conversions;
