//! Application Configuration
//!
//! Static settings shared by the store, logger and preview.

use serde::{Deserialize, Serialize};

/// Local storage key holding the saved quotation collection
pub const STORAGE_KEY: &str = "savedQuotations";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage_key: String,
    pub currency_symbol: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            currency_symbol: "₹".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parsed log level, falling back to `Info` on anything unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);

        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
