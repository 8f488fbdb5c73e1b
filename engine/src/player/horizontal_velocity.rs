//! Horizontal Velocity Smoother
//!
//! Blends the planar velocity toward the input-driven target by a fixed
//! fraction per call. With a constant weight this is an exponential decay per
//! frame, not per second: at 30 FPS the character accelerates half as fast
//! as at 60 FPS. Configure `smoothing_time_constant` for frame-rate
//! independent smoothing.

use glam::{EulerRot, Quat, Vec3};

/// Yaw component of `rotation`. Pitch and roll never steer movement.
pub fn yaw_only(rotation: Quat) -> Quat {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_rotation_y(yaw)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalVelocitySmoother {
    velocity: Vec3,
}

impl HorizontalVelocitySmoother {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Planar speed.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// World-space target velocity for a local input direction.
    ///
    /// The full 3D input is normalized first, then its local vertical
    /// component is discarded, so an input with a Y part walks slower.
    /// Vertical motion belongs to the vertical integrator alone.
    pub fn target_velocity(direction_local: Vec3, body_rotation: Quat, speed: f32) -> Vec3 {
        let direction = direction_local.normalize_or_zero();
        let planar = Vec3::new(direction.x, 0.0, direction.z);
        yaw_only(body_rotation) * planar * speed
    }

    /// Blends one step toward the target and returns the new velocity.
    ///
    /// `weight` is clamped to [0, 1]. The step scales the remaining gap, so
    /// rounding can land on the target but never past it.
    pub fn update(
        &mut self,
        direction_local: Vec3,
        body_rotation: Quat,
        speed: f32,
        weight: f32,
    ) -> Vec3 {
        let target = Self::target_velocity(direction_local, body_rotation, speed);
        self.velocity += (target - self.velocity) * weight.clamp(0.0, 1.0);
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MOVE_FORWARD, MOVE_RIGHT};
    use std::f32::consts::FRAC_PI_2;

    const WEIGHT: f32 = 0.025;
    const SPEED: f32 = 7.0;

    #[test]
    fn test_zero_input_zero_target() {
        assert_eq!(
            HorizontalVelocitySmoother::target_velocity(Vec3::ZERO, Quat::IDENTITY, SPEED),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let target = HorizontalVelocitySmoother::target_velocity(
            MOVE_FORWARD + MOVE_RIGHT,
            Quat::IDENTITY,
            SPEED,
        );
        assert!((target.length() - SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_input_component_is_dropped_after_normalizing() {
        let target = HorizontalVelocitySmoother::target_velocity(
            Vec3::new(0.0, 1.0, -1.0),
            Quat::IDENTITY,
            SPEED,
        );
        assert_eq!(target.y, 0.0);
        // Normalized (0, 1, -1) keeps 1/sqrt(2) of its length in the plane
        assert!((target.z + SPEED * std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_pure_vertical_input_has_no_planar_target() {
        let target =
            HorizontalVelocitySmoother::target_velocity(Vec3::Y, Quat::IDENTITY, SPEED);
        assert_eq!(target, Vec3::ZERO);
    }

    #[test]
    fn test_target_follows_yaw() {
        // Turned 90 degrees right: local forward maps to world +X
        let rotation = Quat::from_rotation_y(-FRAC_PI_2);
        let target = HorizontalVelocitySmoother::target_velocity(MOVE_FORWARD, rotation, SPEED);
        assert!((target.x - SPEED).abs() < 1e-4);
        assert!(target.z.abs() < 1e-4);
    }

    #[test]
    fn test_pitch_does_not_tilt_target() {
        let rotation = Quat::from_rotation_y(0.3) * Quat::from_rotation_x(-1.0);
        let target = HorizontalVelocitySmoother::target_velocity(MOVE_FORWARD, rotation, SPEED);
        assert!(target.y.abs() < 1e-5);
        assert!((target.length() - SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_single_step_moves_by_weight() {
        let mut smoother = HorizontalVelocitySmoother::new();
        let velocity = smoother.update(MOVE_FORWARD, Quat::IDENTITY, SPEED, WEIGHT);
        assert!((velocity.z + SPEED * WEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_approaches_target_without_overshoot() {
        let mut smoother = HorizontalVelocitySmoother::new();
        let mut previous = 0.0;
        for _ in 0..600 {
            smoother.update(MOVE_FORWARD, Quat::IDENTITY, SPEED, WEIGHT);
            let speed = smoother.speed();
            assert!(speed >= previous);
            assert!(speed <= SPEED);
            previous = speed;
        }
        assert!((previous - SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_long_hold_never_passes_target() {
        let mut smoother = HorizontalVelocitySmoother::new();
        for _ in 0..2000 {
            let velocity = smoother.update(MOVE_FORWARD, Quat::IDENTITY, SPEED, WEIGHT);
            assert!(velocity.z >= -SPEED);
            assert_eq!(velocity.x, 0.0);
        }
        assert!((smoother.velocity().z + SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_zero_input_decays_but_never_reaches_zero() {
        let mut smoother = HorizontalVelocitySmoother::new();
        for _ in 0..200 {
            smoother.update(MOVE_FORWARD, Quat::IDENTITY, SPEED, WEIGHT);
        }
        let mut previous = smoother.speed();
        for _ in 0..300 {
            smoother.update(Vec3::ZERO, Quat::IDENTITY, SPEED, WEIGHT);
            let speed = smoother.speed();
            assert!(speed < previous);
            assert!(speed > 0.0);
            previous = speed;
        }
    }

    #[test]
    fn test_weight_is_clamped() {
        let mut smoother = HorizontalVelocitySmoother::new();
        let velocity = smoother.update(MOVE_FORWARD, Quat::IDENTITY, SPEED, 3.0);
        assert!((velocity.z + SPEED).abs() < 1e-5);

        let velocity = smoother.update(Vec3::ZERO, Quat::IDENTITY, SPEED, -1.0);
        assert!((velocity.z + SPEED).abs() < 1e-5);
    }
}
