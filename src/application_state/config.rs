//! # Engine Configuration
//!
//! Tunables for the engine, loaded from a JSON document. Every field has a default, so
//! a partial document (or `{}`) is valid.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::engine_state::camera_state::{
    DEFAULT_FAR_PLANE, DEFAULT_FIELD_OF_VIEW, DEFAULT_NEAR_PLANE,
};
use crate::math::{AngleDeg, Vec3};

/// Errors produced while loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The document is not valid JSON for an `EngineConfig`
    Parse(serde_json::Error),
    /// The document parsed but a value is out of range
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {err}"),
            ConfigError::Parse(err) => write!(f, "failed to parse config: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Engine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Player speed in units per second
    pub movement_speed: f32,
    /// Degrees turned per pixel of mouse movement
    pub mouse_speed: f32,
    /// Vertical field of view in degrees
    pub field_of_view: AngleDeg,
    /// Near clipping plane
    pub near_plane: f32,
    /// Far clipping plane
    pub far_plane: f32,
    /// Where the player starts
    pub spawn_position: Vec3,
    /// Chunks span `-world_radius..world_radius` on every axis
    pub world_radius: i32,
    /// Chance that any one cell is filled
    pub fill_probability: f64,
    /// Seed for world generation; random when absent
    pub seed: Option<u64>,
    /// Viewport width / height
    pub aspect_ratio: f32,
    /// Frames the headless runner simulates
    pub frames: usize,
    /// Simulated time per frame in milliseconds
    pub frame_time_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            movement_speed: 8.0,
            mouse_speed: 1.0 / 45.0,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            spawn_position: Vec3::new(0.0, 0.0, 48.0),
            world_radius: 2,
            fill_probability: 0.05,
            seed: None,
            aspect_ratio: 16.0 / 9.0,
            frames: 120,
            frame_time_ms: 16,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.movement_speed <= 0.0 {
            return Err(invalid(format!(
                "movement_speed must be positive, got {}",
                self.movement_speed
            )));
        }
        if self.mouse_speed <= 0.0 {
            return Err(invalid(format!(
                "mouse_speed must be positive, got {}",
                self.mouse_speed
            )));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(invalid(format!(
                "field_of_view must be in (0, 180), got {}",
                self.field_of_view
            )));
        }
        if self.near_plane <= 0.0 || self.near_plane >= self.far_plane {
            return Err(invalid(format!(
                "need 0 < near_plane < far_plane, got {} and {}",
                self.near_plane, self.far_plane
            )));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(invalid(format!(
                "fill_probability must be in [0, 1], got {}",
                self.fill_probability
            )));
        }
        if self.world_radius < 0 {
            return Err(invalid(format!(
                "world_radius must not be negative, got {}",
                self.world_radius
            )));
        }
        if self.aspect_ratio <= 0.0 {
            return Err(invalid(format!(
                "aspect_ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.spawn_position, Vec3::new(0.0, 0.0, 48.0));
        assert_eq!(config.movement_speed, 8.0);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = EngineConfig::from_json_str(
            r#"{ "seed": 7, "world_radius": 1, "spawn_position": { "x": 1.0, "y": 2.0, "z": 3.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.world_radius, 1);
        assert_eq!(config.spawn_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.far_plane, DEFAULT_FAR_PLANE);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for json in [
            r#"{ "movement_speed": 0.0 }"#,
            r#"{ "near_plane": 50.0 }"#,
            r#"{ "field_of_view": 180.0 }"#,
            r#"{ "fill_probability": 1.5 }"#,
            r#"{ "world_radius": -1 }"#,
        ] {
            let err = EngineConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{json}");
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::load("/nonexistent/voxel-scene.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("failed to read config"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EngineConfig {
            seed: Some(42),
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }
}
