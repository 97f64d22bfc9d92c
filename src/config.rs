//! Run configuration types

use serde::{Deserialize, Serialize};

/// Configuration for one dispatch run
///
/// Defines how many attempts to perform in total and how many worker
/// tasks perform them in parallel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Total number of attempts to perform
    pub total: usize,

    /// Number of concurrent worker tasks
    pub concurrency: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total: 1,
            concurrency: 1,
        }
    }
}

impl RunConfig {
    /// Create a new config
    pub fn new(total: usize, concurrency: usize) -> Self {
        Self { total, concurrency }
    }

    /// Set the total attempt count
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    /// Set the concurrency level
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Validate the configuration
    ///
    /// A total of zero is a valid (empty) run. A concurrency of zero
    /// could never make progress and is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(
                "concurrency must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid concurrency value
    #[error("invalid concurrency: {0}")]
    InvalidConcurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.total, 1);
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = RunConfig::default().with_total(500).with_concurrency(10);

        assert_eq!(config.total, 500);
        assert_eq!(config.concurrency, 10);
    }

    #[test]
    fn test_config_validation_valid() {
        assert!(RunConfig::new(100, 10).validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_total_is_valid() {
        assert!(RunConfig::new(0, 1).validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_concurrency() {
        assert!(RunConfig::new(100, 0).validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = RunConfig::new(1000, 5);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RunConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.total, 1000);
        assert_eq!(deserialized.concurrency, 5);
    }
}
