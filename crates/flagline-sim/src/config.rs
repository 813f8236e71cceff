//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flagline_core::constants::*;
use flagline_core::enums::TargetPriority;
use flagline_core::error::PathError;
use flagline_core::path::PathGeometry;

use crate::world_setup::DEFAULT_WAYPOINTS;

/// Configuration loading or validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
    #[error("configuration validation error: {0}")]
    Invalid(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub starting_currency: u32,
    pub starting_lives: u32,
    /// Seconds over which a wave's roster is spread.
    pub wave_duration: f64,
    /// Extra seconds after `wave_duration` before a stuck wave is force-closed.
    pub wave_timeout_grace: f64,
    /// Towers expire this many waves after placement. `None` keeps them forever.
    pub tower_lifespan_waves: Option<u32>,
    pub targeting: TargetPriority,
    /// Minimum distance between a tower and the path.
    pub placement_tolerance: f64,
    /// Authored waypoints as `[x, y]` pairs. `None` uses the built-in path.
    pub path: Option<Vec<[f64; 2]>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            starting_currency: STARTING_CURRENCY,
            starting_lives: STARTING_LIVES,
            wave_duration: WAVE_DURATION_SECS,
            wave_timeout_grace: WAVE_TIMEOUT_GRACE_SECS,
            tower_lifespan_waves: None,
            targeting: TargetPriority::default(),
            placement_tolerance: PATH_PLACEMENT_TOLERANCE,
            path: None,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be a non-negative number, got {}",
                self.time_scale
            )));
        }
        if !self.wave_duration.is_finite() || self.wave_duration <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wave_duration must be positive, got {}",
                self.wave_duration
            )));
        }
        if !self.wave_timeout_grace.is_finite() || self.wave_timeout_grace < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wave_timeout_grace must be non-negative, got {}",
                self.wave_timeout_grace
            )));
        }
        if !self.placement_tolerance.is_finite() || self.placement_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "placement_tolerance must be non-negative, got {}",
                self.placement_tolerance
            )));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".into()));
        }
        self.path_geometry()?;
        Ok(())
    }

    /// The configured path, or the built-in one.
    pub fn path_geometry(&self) -> Result<PathGeometry, ConfigError> {
        let geometry = match &self.path {
            Some(points) => {
                let pairs: Vec<(f64, f64)> = points.iter().map(|p| (p[0], p[1])).collect();
                PathGeometry::from_points(&pairs)?
            }
            None => PathGeometry::from_points(&DEFAULT_WAYPOINTS)?,
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SimConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = SimConfig::from_toml_str(
            r#"
            seed = 7
            starting_currency = 500
            tower_lifespan_waves = 3
            targeting = "leading"
            path = [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]]
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_currency, 500);
        assert_eq!(config.tower_lifespan_waves, Some(3));
        assert_eq!(config.targeting, TargetPriority::Leading);
        assert_eq!(config.path_geometry().unwrap().total_length(), 200.0);
        assert_eq!(config.starting_lives, STARTING_LIVES);
    }

    #[test]
    fn test_rejects_short_path() {
        let err = SimConfig::from_toml_str("path = [[1.0, 2.0]]").unwrap_err();
        assert!(matches!(err, ConfigError::Path(PathError::TooFewWaypoints(1))));
    }

    #[test]
    fn test_rejects_bad_duration() {
        let err = SimConfig::from_toml_str("wave_duration = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SimConfig::from_toml_str("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
