//! Locomotion Configuration
//!
//! Every tuning value the locomotion and look controllers read. The defaults
//! reproduce the classic feel: 7 m/s walk, a 12 m/s jump against 29.43 m/s²
//! gravity (3 g), and a 2.5% per-frame velocity blend.
//!
//! Files may be partial; missing fields fall back to [`Default`].
//!
//! ```ignore
//! use strider_engine::config::LocomotionConfig;
//!
//! let config = LocomotionConfig::from_json_str(r#"{ "horizontal_speed": 9.0 }"#)?;
//! assert_eq!(config.jump_impulse_speed, 12.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::physics::LayerMask;

/// Walk speed in meters per second
pub const HORIZONTAL_SPEED: f32 = 7.0;

/// Fraction of the remaining velocity gap closed per frame
pub const VELOCITY_SMOOTHING_FACTOR: f32 = 0.025;

/// Upward speed set by a jump, in meters per second
pub const JUMP_IMPULSE_SPEED: f32 = 12.0;

/// Gravity acceleration in meters per second squared (3 g)
pub const GRAVITY_ACCELERATION: f32 = 29.43;

/// Vertical velocity held while grounded.
/// Must stay negative so the grounded gate keeps passing on flat ground.
pub const GROUNDED_SNAP_VELOCITY: f32 = -4.0;

/// Radius of the ground probe sphere in meters
pub const GROUND_PROBE_RADIUS: f32 = 0.5;

/// Distance below the body origin where the probe sphere is centered
pub const GROUND_PROBE_OFFSET: f32 = 0.75;

/// Look sensitivity in degrees per input unit
pub const LOOK_SENSITIVITY: f32 = 0.2;

/// Tuning for one controlled character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Target horizontal speed at full input, m/s
    pub horizontal_speed: f32,
    /// Per-frame blend weight in [0, 1]
    pub velocity_smoothing_factor: f32,
    /// When set, replaces the fixed per-frame weight with
    /// `1 - exp(-dt / tau)` so smoothing no longer depends on frame rate
    pub smoothing_time_constant: Option<f32>,
    /// Vertical speed applied by an accepted jump, m/s
    pub jump_impulse_speed: f32,
    /// Downward acceleration while airborne, m/s²
    pub gravity_acceleration: f32,
    /// Optional cap on downward speed. `None` keeps free fall unbounded.
    pub terminal_fall_speed: Option<f32>,
    /// Vertical velocity written every grounded frame (negative)
    pub grounded_snap_velocity: f32,
    /// Ground probe sphere radius, meters
    pub ground_probe_radius: f32,
    /// Ground probe center offset below the body origin, meters
    pub ground_probe_offset: f32,
    /// Layers the ground probe treats as walkable
    pub ground_layer_mask: LayerMask,
    /// Yaw degrees per unit of horizontal look input
    pub look_sensitivity_x: f32,
    /// Pitch degrees per unit of vertical look input
    pub look_sensitivity_y: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            horizontal_speed: HORIZONTAL_SPEED,
            velocity_smoothing_factor: VELOCITY_SMOOTHING_FACTOR,
            smoothing_time_constant: None,
            jump_impulse_speed: JUMP_IMPULSE_SPEED,
            gravity_acceleration: GRAVITY_ACCELERATION,
            terminal_fall_speed: None,
            grounded_snap_velocity: GROUNDED_SNAP_VELOCITY,
            ground_probe_radius: GROUND_PROBE_RADIUS,
            ground_probe_offset: GROUND_PROBE_OFFSET,
            ground_layer_mask: LayerMask::DEFAULT,
            look_sensitivity_x: LOOK_SENSITIVITY,
            look_sensitivity_y: LOOK_SENSITIVITY,
        }
    }
}

impl LocomotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LocomotionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is one the controllers can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("horizontal_speed", self.horizontal_speed)?;
        non_negative("jump_impulse_speed", self.jump_impulse_speed)?;
        non_negative("gravity_acceleration", self.gravity_acceleration)?;
        non_negative("ground_probe_offset", self.ground_probe_offset)?;
        finite("look_sensitivity_x", self.look_sensitivity_x)?;
        finite("look_sensitivity_y", self.look_sensitivity_y)?;

        if !(0.0..=1.0).contains(&self.velocity_smoothing_factor) {
            return Err(ConfigError::invalid(
                "velocity_smoothing_factor",
                format!("{} is outside [0, 1]", self.velocity_smoothing_factor),
            ));
        }
        if let Some(tau) = self.smoothing_time_constant {
            positive("smoothing_time_constant", tau)?;
        }
        if let Some(cap) = self.terminal_fall_speed {
            positive("terminal_fall_speed", cap)?;
        }
        if !(self.grounded_snap_velocity < 0.0 && self.grounded_snap_velocity.is_finite()) {
            return Err(ConfigError::invalid(
                "grounded_snap_velocity",
                format!(
                    "{} must be negative or the character cannot stay grounded",
                    self.grounded_snap_velocity
                ),
            ));
        }
        positive("ground_probe_radius", self.ground_probe_radius)?;
        if self.ground_layer_mask.is_empty() {
            return Err(ConfigError::invalid(
                "ground_layer_mask",
                "no ground layer configured",
            ));
        }
        Ok(())
    }

    /// Blend weight for a frame of length `dt`, clamped to [0, 1].
    pub fn blend_weight(&self, dt: f32) -> f32 {
        let weight = match self.smoothing_time_constant {
            Some(tau) => 1.0 - (-dt / tau).exp(),
            None => self.velocity_smoothing_factor,
        };
        weight.clamp(0.0, 1.0)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not finite")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} must be greater than zero")));
    }
    Ok(())
}
