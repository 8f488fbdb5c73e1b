//! Look Controller
//!
//! First-person look: the horizontal look delta turns the whole body about
//! its up axis, the vertical delta accumulates into a clamped pitch applied
//! to the camera rig only. Response is instant, no smoothing.
//!
//! Angles are in degrees. Positive pitch looks down, so pushing the look
//! input up (positive y) lowers the pitch value and raises the view.
//!
//! Within a frame the locomotion update must run first, so movement uses the
//! previous frame's yaw.

use glam::{Quat, Vec2};

use super::rig::CameraRig;
use crate::config::LocomotionConfig;
use crate::physics::CharacterBody;

/// Pitch limit in degrees, both directions.
pub const PITCH_LIMIT: f32 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LookController {
    /// Accumulated pitch in degrees, always within [-PITCH_LIMIT, PITCH_LIMIT]
    pitch: f32,
    /// Yaw degrees per input unit
    sensitivity_x: f32,
    /// Pitch degrees per input unit
    sensitivity_y: f32,
}

impl LookController {
    pub fn new(sensitivity_x: f32, sensitivity_y: f32) -> Self {
        Self {
            pitch: 0.0,
            sensitivity_x,
            sensitivity_y,
        }
    }

    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self::new(config.look_sensitivity_x, config.look_sensitivity_y)
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn sensitivity(&self) -> Vec2 {
        Vec2::new(self.sensitivity_x, self.sensitivity_y)
    }

    /// Rig rotation for a pitch in degrees.
    pub fn pitch_rotation(pitch: f32) -> Quat {
        // -Z forward: a negative X rotation tips the view down
        Quat::from_rotation_x(-pitch.to_radians())
    }

    /// Accumulates a vertical look delta into the clamped pitch and returns it.
    pub fn apply_pitch_delta(&mut self, delta_y: f32) -> f32 {
        self.pitch -= delta_y * self.sensitivity_y;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.pitch
    }

    /// Turns the body by `delta_x * sensitivity_x` degrees about its local up
    /// axis. Positive turns right.
    pub fn apply_yaw_delta<B: CharacterBody + ?Sized>(&self, delta_x: f32, body: &mut B) {
        let degrees = delta_x * self.sensitivity_x;
        let turn = Quat::from_rotation_y(-degrees.to_radians());
        body.set_rotation((body.rotation() * turn).normalize());
    }

    /// One look step: yaw the body, then pitch the rig.
    pub fn update<B, R>(&mut self, look_delta: Vec2, body: &mut B, rig: &mut R)
    where
        B: CharacterBody + ?Sized,
        R: CameraRig + ?Sized,
    {
        self.apply_yaw_delta(look_delta.x, body);
        let pitch = self.apply_pitch_delta(look_delta.y);
        rig.set_local_rotation(Self::pitch_rotation(pitch));
    }
}

impl Default for LookController {
    fn default() -> Self {
        Self::from_config(&LocomotionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraRigNode;
    use crate::physics::{CapsuleBody, CollisionWorld};
    use glam::{EulerRot, Vec3};
    use std::sync::Arc;

    fn body() -> CapsuleBody {
        CapsuleBody::new(Arc::new(CollisionWorld::new()), Vec3::ZERO)
    }

    fn yaw_degrees(body: &CapsuleBody) -> f32 {
        let (yaw, _, _) = body.rotation().to_euler(EulerRot::YXZ);
        yaw.to_degrees()
    }

    #[test]
    fn test_default_values() {
        let look = LookController::default();
        assert_eq!(look.pitch(), 0.0);
        assert_eq!(look.sensitivity(), Vec2::new(0.2, 0.2));
    }

    #[test]
    fn test_look_up_input_lowers_pitch() {
        let mut look = LookController::default();
        assert!((look.apply_pitch_delta(200.0) + 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_clamps_both_ways() {
        let mut look = LookController::default();
        assert_eq!(look.apply_pitch_delta(100_000.0), -90.0);
        assert_eq!(look.apply_pitch_delta(-100_000.0), 90.0);
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let mut body = body();
        let look = LookController::default();
        look.apply_yaw_delta(450.0, &mut body); // 90 degrees

        let forward = body.rotation() * Vec3::NEG_Z;
        assert!((forward - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_yaw_accumulates_on_body() {
        let mut body = body();
        let look = LookController::default();
        look.apply_yaw_delta(50.0, &mut body);
        look.apply_yaw_delta(50.0, &mut body);
        assert!((yaw_degrees(&body) + 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_stays_on_rig() {
        let mut body = body();
        let mut rig = CameraRigNode::new();
        let mut look = LookController::default();

        look.update(Vec2::new(0.0, -150.0), &mut body, &mut rig);
        assert!((look.pitch() - 30.0).abs() < 1e-4);
        // Body untouched, rig tipped down
        assert!((body.rotation().dot(Quat::IDENTITY).abs() - 1.0).abs() < 1e-6);
        let view = rig.view_forward(body.rotation());
        assert!(view.y < 0.0);
        assert!((view.y + 30f32.to_radians().sin()).abs() < 1e-4);
    }

    #[test]
    fn test_rig_rotation_has_no_roll_or_yaw() {
        let mut body = body();
        let mut rig = CameraRigNode::new();
        let mut look = LookController::default();
        look.update(Vec2::new(123.0, 77.0), &mut body, &mut rig);

        let (yaw, pitch, roll) = rig.local_rotation().to_euler(EulerRot::YXZ);
        assert!(yaw.abs() < 1e-5);
        assert!(roll.abs() < 1e-5);
        assert!((pitch.to_degrees() - (-look.pitch())).abs() < 1e-3);
    }
}
