//! Environment configuration.
//!
//! Every field has a default matching the reference lunar scene, so a JSON
//! file only needs to list what it overrides.

use std::path::Path;

use physics::{Arena, KinematicParams};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scene::SceneLayoutGenerator;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Arena width in world units.
    pub width: f64,
    /// Arena height in world units.
    pub height: f64,
    /// Surface line; the probe crashes at or below it (y grows downwards).
    pub surface_y: f64,
    /// Downward acceleration.
    pub gravity: f64,
    /// Integration timestep.
    pub dt: f64,
    /// Force per unit thruster command.
    pub thrust_force: f64,
    /// Fuel at the start of every episode.
    pub start_fuel: f64,
    /// Distance between neighbouring pad centres. The first centre sits half
    /// a stride in from the left edge.
    pub pad_stride: f64,
    pub pad_count: usize,
    /// Launch and target altitude as a fraction of the arena height.
    pub start_altitude_fraction: f64,
    /// Seed of the pad picker.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            surface_y: 500.0,
            gravity: 1.62,
            dt: 0.05,
            thrust_force: 2.0,
            start_fuel: 100.0,
            pad_stride: 120.0,
            pad_count: 6,
            start_altitude_fraction: 0.2,
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Launch and target altitude.
    #[must_use]
    pub fn start_y(&self) -> f64 {
        self.height * self.start_altitude_fraction
    }

    /// # Errors
    ///
    /// Fails when the arena is degenerate.
    pub fn arena(&self) -> Result<Arena, ConfigError> {
        Ok(Arena::new(self.width, self.height, self.surface_y)?)
    }

    /// # Errors
    ///
    /// Fails on a non-positive timestep or non-finite forces.
    pub fn kinematics(&self) -> Result<KinematicParams, ConfigError> {
        Ok(KinematicParams::new(self.dt, self.gravity, self.thrust_force)?)
    }

    /// Check every constraint an environment relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = self.arena()?;
        self.kinematics()?;

        if !self.start_fuel.is_finite() || self.start_fuel <= 0.0 {
            return Err(ConfigError::NonPositiveFuel(self.start_fuel));
        }

        // pads grow left to right from half a stride, so the last one bounds the row
        SceneLayoutGenerator::check_row(self.pad_stride, self.pad_count)?;
        let x = SceneLayoutGenerator::outermost_pad(self.pad_stride, self.pad_count);
        if x > arena.width {
            return Err(ConfigError::PadOutsideArena {
                x,
                width: arena.width,
            });
        }

        let start_y = self.start_y();
        if !start_y.is_finite() || start_y < 0.0 || start_y >= arena.surface_y {
            return Err(ConfigError::StartBelowSurface {
                start_y,
                surface_y: arena.surface_y,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::LunarEnv;

    #[test]
    fn default_config_is_valid() {
        EnvConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EnvConfig::from_json_str(r#"{ "start_fuel": 500.0, "seed": 7 }"#).unwrap();
        assert_eq!(cfg.start_fuel, 500.0);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.pad_count, 6);
        assert_eq!(cfg.dt, 0.05);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = EnvConfig::from_json_str(r#"{ "fuel": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn single_pad_is_a_config_error() {
        let cfg = EnvConfig {
            pad_count: 1,
            ..EnvConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::TooFewPads(1))));
    }

    #[test]
    fn non_positive_dt_is_a_config_error() {
        let cfg = EnvConfig {
            dt: 0.0,
            ..EnvConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Physics(_))));
    }

    #[test]
    fn zero_size_arena_is_a_config_error() {
        let cfg = EnvConfig {
            width: 0.0,
            ..EnvConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Physics(_))));
    }

    #[test]
    fn pads_must_fit_in_the_arena() {
        let cfg = EnvConfig {
            pad_count: 7,
            ..EnvConfig::default()
        };
        // 60 + 6 * 120 = 780 still fits, the eighth pad does not
        cfg.validate().unwrap();
        let cfg = EnvConfig {
            pad_count: 8,
            ..EnvConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::PadOutsideArena { .. })
        ));
    }

    #[test]
    fn oversized_pad_count_is_rejected_without_allocating() {
        let cfg = EnvConfig::from_json_str(r#"{ "pad_count": 18446744073709551615 }"#).unwrap();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooManyPads { count: usize::MAX, .. })
        ));
        assert!(matches!(
            LunarEnv::new(cfg),
            Err(ConfigError::TooManyPads { .. })
        ));

        // a row that fits the width but exceeds the cap
        let cfg = EnvConfig {
            pad_count: 5_000,
            pad_stride: 0.1,
            ..EnvConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::TooManyPads { count: 5_000, .. })));
    }

    #[test]
    fn launch_must_be_above_surface() {
        let cfg = EnvConfig {
            start_altitude_fraction: 0.9,
            ..EnvConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::StartBelowSurface { .. })
        ));
    }

    #[test]
    fn empty_tank_is_a_config_error() {
        let cfg = EnvConfig {
            start_fuel: 0.0,
            ..EnvConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositiveFuel(_))));
    }
}
