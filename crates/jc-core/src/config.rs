//! Configuration types and loading
//!
//! Plain serde structs with defaults; deployment overrides come from
//! environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Durable store configuration
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per collection
    pub data_dir: String,
    /// Seed the demonstration dataset when a collection is empty.
    /// Development convenience only; disable in production.
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Tracing filter directive (e.g. "jc_store=debug,info")
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                data_dir: "./data".to_string(),
                seed_demo_data: true,
            },
            logging: LoggingConfig {
                filter: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("JOBCARD_DATA_DIR") {
            config.store.data_dir = dir;
        }
        if let Ok(seed) = std::env::var("JOBCARD_SEED_DEMO_DATA") {
            config.store.seed_demo_data = matches!(seed.as_str(), "1" | "true" | "yes");
        }
        if let Ok(filter) = std::env::var("JOBCARD_LOG") {
            config.logging.filter = filter;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store.data_dir, "./data");
        assert!(config.store.seed_demo_data);
        assert_eq!(config.logging.filter, "info");
    }
}
