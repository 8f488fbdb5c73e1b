//! Vertical Velocity Integrator
//!
//! Sole owner of the character's vertical speed (positive = up). Gravity
//! accumulates while airborne; on the ground the speed is pinned to a small
//! negative snap value so the grounded gate keeps passing frame after frame.

use crate::config::LocomotionConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct VerticalVelocityIntegrator {
    vertical_velocity: f32,
    jump_impulse_speed: f32,
    gravity_acceleration: f32,
    grounded_snap_velocity: f32,
    terminal_fall_speed: Option<f32>,
}

impl VerticalVelocityIntegrator {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            vertical_velocity: 0.0,
            jump_impulse_speed: config.jump_impulse_speed,
            gravity_acceleration: config.gravity_acceleration,
            grounded_snap_velocity: config.grounded_snap_velocity,
            terminal_fall_speed: config.terminal_fall_speed,
        }
    }

    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Applies the jump impulse if `grounded`. Airborne requests are dropped:
    /// no buffering, no double jump. Returns whether the jump was accepted.
    ///
    /// The impulse is assigned, not added, so repeated requests in the same
    /// frame have the effect of one.
    pub fn on_jump_requested(&mut self, grounded: bool) -> bool {
        if !grounded {
            return false;
        }
        self.vertical_velocity = self.jump_impulse_speed;
        true
    }

    /// Advances one frame.
    pub fn integrate(&mut self, grounded: bool, dt: f32) {
        if grounded {
            self.vertical_velocity = self.grounded_snap_velocity;
            return;
        }

        self.vertical_velocity -= self.gravity_acceleration * dt;
        if let Some(cap) = self.terminal_fall_speed {
            self.vertical_velocity = self.vertical_velocity.max(-cap);
        }
    }
}

impl Default for VerticalVelocityIntegrator {
    fn default() -> Self {
        Self::new(&LocomotionConfig::default())
    }
}
