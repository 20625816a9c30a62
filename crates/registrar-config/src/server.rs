//! HTTP listener configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: interface to bind (default `0.0.0.0`)
//! - `PORT`: API port (default `5001`)
//! - `METRICS_PORT`: Prometheus scrape port (default `9090`)

use std::env;

use crate::env_or;

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            metrics_port: 9090,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            metrics_port: env_or("METRICS_PORT", defaults.metrics_port),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_addr(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
        assert_eq!(config.metrics_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        assert_eq!(env_or("REGISTRAR_TEST_UNSET_PORT_VARIABLE", 5001u16), 5001);
    }
}
