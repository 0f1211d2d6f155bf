//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

use super::error::GatewayError;

/// Main gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listen address for the REST API
    pub http_addr: SocketAddr,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            cors: CorsConfig::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.cors.enabled && self.cors.allowed_origins.is_empty() {
            return Err(GatewayError::Config(
                "cors.allowed_origins cannot be empty when CORS is enabled".into(),
            ));
        }
        if self.cors.enabled && self.cors.allowed_methods.is_empty() {
            return Err(GatewayError::Config(
                "cors.allowed_methods cannot be empty when CORS is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins (`*` for any)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers (`*` for any)
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["*".to_string()],
            max_age: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_enabled_cors_needs_origins() {
        let config = GatewayConfig {
            cors: CorsConfig {
                allowed_origins: vec![],
                ..CorsConfig::default()
            },
            ..GatewayConfig::default()
        };
        assert!(matches!(config.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_disabled_cors_skips_checks() {
        let config = GatewayConfig {
            cors: CorsConfig {
                enabled: false,
                allowed_origins: vec![],
                allowed_methods: vec![],
                ..CorsConfig::default()
            },
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
