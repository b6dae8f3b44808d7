//! Reduction configuration
//!
//! The knobs the invoking visualization supplies to the reduction
//! pipeline: how many points a series chart can render responsively,
//! and the target resolution for matrix heatmaps.
//!
//! The portal constructs [`ReductionConfig`] directly and passes it
//! per call. The companion binary can also load the same struct from
//! a TOML file, with missing fields falling back to defaults.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum point count for a rendered series
pub const DEFAULT_SERIES_TARGET_POINTS: usize = 1200;

/// Default maximum rows/columns for a rendered matrix
pub const DEFAULT_MATRIX_TARGET_SIZE: usize = 256;

/// Reduction knobs supplied by the invoking visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionConfig {
    /// Maximum number of points per rendered series
    #[serde(default = "default_series_target_points")]
    pub series_target_points: usize,

    /// Maximum rows/columns per rendered matrix
    #[serde(default = "default_matrix_target_size")]
    pub matrix_target_size: usize,
}

fn default_series_target_points() -> usize {
    DEFAULT_SERIES_TARGET_POINTS
}

fn default_matrix_target_size() -> usize {
    DEFAULT_MATRIX_TARGET_SIZE
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            series_target_points: DEFAULT_SERIES_TARGET_POINTS,
            matrix_target_size: DEFAULT_MATRIX_TARGET_SIZE,
        }
    }
}

impl ReductionConfig {
    /// Parse a config from TOML text
    ///
    /// Missing fields take their defaults. Zero values are kept here
    /// and clamped to 1 at the point of use.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CoreError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Save the config to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| CoreError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReductionConfig::default();
        assert_eq!(config.series_target_points, 1200);
        assert_eq!(config.matrix_target_size, 256);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ReductionConfig::from_toml_str("series_target_points = 500\n").unwrap();
        assert_eq!(config.series_target_points, 500);
        assert_eq!(config.matrix_target_size, DEFAULT_MATRIX_TARGET_SIZE);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = ReductionConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReductionConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ReductionConfig::from_toml_str("series_target_points = \"many\"").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
