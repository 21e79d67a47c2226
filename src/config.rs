// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine configuration loaded from environment variables.

use std::env;

use crate::models::{SortOrder, DEFAULT_RANKING_LIMIT};
use crate::services::NOT_AVAILABLE;

/// Engine configuration, loaded once by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of users kept in each top-N ranking
    pub ranking_limit: usize,
    /// Display order for leaderboard pages; `None` uses each metric's own
    /// order (ranks ascending, counts descending)
    pub sort_order: Option<SortOrder>,
    /// Placeholder shown for values that do not exist
    pub not_available: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking_limit: DEFAULT_RANKING_LIMIT,
            sort_order: None,
            not_available: NOT_AVAILABLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset variables keep their defaults, set
    /// but malformed ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let ranking_limit = match env::var("ORG_STATS_RANKING_LIMIT") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::invalid("ORG_STATS_RANKING_LIMIT", raw)),
            },
            Err(_) => defaults.ranking_limit,
        };

        let sort_order = match env::var("ORG_STATS_SORT_ORDER") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::invalid("ORG_STATS_SORT_ORDER", raw))?,
            ),
            Err(_) => defaults.sort_order,
        };

        let not_available = env::var("ORG_STATS_NOT_AVAILABLE")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.not_available);

        let config = Self {
            ranking_limit,
            sort_order,
            not_available,
        };
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: String) -> Self {
        ConfigError::Invalid { var, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so all env cases run in one
    // test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("ORG_STATS_RANKING_LIMIT");
        env::remove_var("ORG_STATS_SORT_ORDER");
        env::remove_var("ORG_STATS_NOT_AVAILABLE");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config, Config::default());

        env::set_var("ORG_STATS_RANKING_LIMIT", "25");
        env::set_var("ORG_STATS_SORT_ORDER", "asc");
        env::set_var("ORG_STATS_NOT_AVAILABLE", "-");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.ranking_limit, 25);
        assert_eq!(config.sort_order, Some(SortOrder::Asc));
        assert_eq!(config.not_available, "-");

        env::set_var("ORG_STATS_RANKING_LIMIT", "0");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "ORG_STATS_RANKING_LIMIT",
                ..
            }
        ));

        env::set_var("ORG_STATS_RANKING_LIMIT", "10");
        env::set_var("ORG_STATS_SORT_ORDER", "sideways");
        assert!(Config::from_env().is_err());

        env::remove_var("ORG_STATS_RANKING_LIMIT");
        env::remove_var("ORG_STATS_SORT_ORDER");
        env::remove_var("ORG_STATS_NOT_AVAILABLE");
    }
}
