use registrar_config::{CorsConfig, DatabaseConfig, JwtConfig};
use registrar_db::DocumentStore;
use tracing::{error, info};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: DocumentStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: DocumentStore, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
        }
    }
}

/// Builds the process-wide state from the environment.
///
/// Never fails: a store that cannot be reached or configured is logged and
/// each request that needs it fails on its own.
pub async fn init_app_state() -> AppState {
    let store = open_store(&DatabaseConfig::from_env()).await;

    AppState::new(store, JwtConfig::from_env(), CorsConfig::from_env())
}

/// Opens the configured store and applies migrations.
///
/// An unparsable URL yields [`DocumentStore::Unavailable`]; an unreachable
/// Postgres server yields a lazy store that retries migrations on first use.
pub async fn open_store(config: &DatabaseConfig) -> DocumentStore {
    let store = match DocumentStore::connect(config) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to configure document store");
            return DocumentStore::unavailable(e.to_string());
        }
    };

    match store.migrate().await {
        Ok(()) => info!(backend = store.backend(), "Document store ready"),
        Err(e) => error!(backend = store.backend(), error = %e, "Failed to prepare document store"),
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_store_falls_back_on_invalid_url() {
        let config = DatabaseConfig {
            url: "not a url".to_string(),
            ..DatabaseConfig::default()
        };

        let store = open_store(&config).await;
        assert_eq!(store.backend(), "unavailable");
        assert!(store.find_all("subjects").await.is_err());
    }

    #[tokio::test]
    async fn test_open_store_memory_url() {
        let store = open_store(&DatabaseConfig::memory()).await;
        assert_eq!(store.backend(), "memory");
        assert!(store.find_all("subjects").await.unwrap().is_empty());
    }
}
