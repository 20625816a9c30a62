//! # Registrar Config
//!
//! Configuration types for the Registrar API, each loaded from environment
//! variables with a working default:
//!
//! - [`server`]: listen address and metrics port
//! - [`database`]: document store connection settings
//! - [`cors`]: the single allowed browser origin
//! - [`jwt`]: token signing secret and lifetime
//!
//! # Example
//!
//! ```ignore
//! use registrar_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let database = DatabaseConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Parses an environment variable, falling back to `default` when it is unset
/// or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
