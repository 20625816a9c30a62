//! Document store connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string, or `memory://` for the
//!   in-process store (default `postgres://localhost:5432/school_management`)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: how long a request waits for a
//!   connection before failing (default 5)

use std::env;

use crate::env_or;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/school_management";
pub const MEMORY_URL_SCHEME: &str = "memory://";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            acquire_timeout_secs: env_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
        }
    }

    pub fn memory() -> Self {
        Self {
            url: MEMORY_URL_SCHEME.to_string(),
            ..Self::default()
        }
    }

    /// True when the URL selects the in-process store.
    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_URL_SCHEME)
    }
}
