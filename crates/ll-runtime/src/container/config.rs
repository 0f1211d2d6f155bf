//! # Runtime Configuration
//!
//! Defaults overlaid with `LL_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LL_HTTP_ADDR` | `127.0.0.1:8080` | REST listen address |
//! | `LL_DATA_DIR` | `./data` | Directory holding `preferences.json` |
//! | `LL_RNG_SEED` | unset | Seed every simulator for reproducible runs |
//! | `LL_TIMING_SCALE` | `1.0` | Multiplier applied to every simulated delay |
//! | `LL_PREFERS_DARK` | `false` | System theme used when nothing is stored |

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ll_07_api_gateway::{CorsConfig, GatewayConfig};
use shared_types::SimulationTimings;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("timing scale must be a positive finite number, got {0}")]
    InvalidTimingScale(f64),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub http_addr: SocketAddr,
    pub data_dir: PathBuf,
    /// `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
    pub timing_scale: f64,
    pub system_prefers_dark: bool,
    pub cors: CorsConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            data_dir: PathBuf::from("./data"),
            rng_seed: None,
            timing_scale: 1.0,
            system_prefers_dark: false,
            cors: CorsConfig::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Overlay values produced by `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LL_HTTP_ADDR") {
            config.http_addr = parse_var("LL_HTTP_ADDR", addr)?;
        }
        if let Some(dir) = lookup("LL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup("LL_RNG_SEED") {
            config.rng_seed = Some(parse_var("LL_RNG_SEED", seed)?);
        }
        if let Some(scale) = lookup("LL_TIMING_SCALE") {
            config.timing_scale = parse_var("LL_TIMING_SCALE", scale)?;
        }
        if let Some(dark) = lookup("LL_PREFERS_DARK") {
            config.system_prefers_dark = matches!(
                dark.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.timing_scale.is_finite() || self.timing_scale <= 0.0 {
            return Err(ConfigError::InvalidTimingScale(self.timing_scale));
        }
        Ok(())
    }

    /// Simulated delays after applying `timing_scale`.
    pub fn timings(&self) -> SimulationTimings {
        SimulationTimings::default().scaled(self.timing_scale)
    }

    pub fn gateway(&self) -> GatewayConfig {
        GatewayConfig {
            http_addr: self.http_addr,
            cors: self.cors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.timings(), SimulationTimings::default());
    }

    #[test]
    fn test_env_overlay() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("LL_HTTP_ADDR", "0.0.0.0:9000"),
            ("LL_DATA_DIR", "/var/lib/lifelink"),
            ("LL_RNG_SEED", "42"),
            ("LL_TIMING_SCALE", "0.5"),
            ("LL_PREFERS_DARK", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.http_addr.port(), 9000);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/lifelink"));
        assert_eq!(config.rng_seed, Some(42));
        assert!(config.system_prefers_dark);
        assert_eq!(config.timings().search, Duration::from_millis(1000));
        assert_eq!(config.gateway().http_addr, config.http_addr);
    }

    #[test]
    fn test_unparsable_address() {
        let err = RuntimeConfig::from_lookup(lookup(&[("LL_HTTP_ADDR", "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "LL_HTTP_ADDR",
                value: "localhost".into()
            }
        );
    }

    #[test]
    fn test_timing_scale_must_be_positive() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RuntimeConfig {
                timing_scale: bad,
                ..RuntimeConfig::default()
            };
            assert!(config.validate().is_err(), "scale {bad} accepted");
        }
    }
}
