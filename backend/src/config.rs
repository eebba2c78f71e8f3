//! Forecaster configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a [`ForecastConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Limits and tuning knobs for [`crate::Forecaster`]
///
/// # Example
/// ```
/// use rental_pricing_core_rs::ForecastConfig;
///
/// let config = ForecastConfig::from_json_str(r#"{"max_duration_days": 365}"#).unwrap();
/// assert_eq!(config.max_duration_days, 365);
/// assert_eq!(config.parallel_threshold, ForecastConfig::default().parallel_threshold);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Longest accepted duration in days
    ///
    /// The cost table is O(duration) in memory, so this bounds a single
    /// request's allocation.
    pub max_duration_days: u32,

    /// Batch size at which bulk forecasts run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            max_duration_days: 36_500, // 100 years
            parallel_threshold: 64,
        }
    }
}

impl ForecastConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
