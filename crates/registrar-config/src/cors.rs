use std::env;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin policy. Exactly one browser origin is allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origin = env::var("CORS_ORIGIN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        Self { allowed_origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin_is_frontend_dev_server() {
        assert_eq!(CorsConfig::default().allowed_origin, "http://localhost:5173");
    }
}
