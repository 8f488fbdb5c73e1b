//! Camera Rig
//!
//! The camera hangs off a child node of the character body. Yaw lives on the
//! body, pitch lives on this node only, so the view never rolls and the
//! movement axes never tilt.

use glam::{Quat, Vec3};

/// Default eye height above the body origin (capsule center), meters.
pub const DEFAULT_EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

/// Child transform node that carries the camera.
pub trait CameraRig {
    fn local_rotation(&self) -> Quat;
    fn set_local_rotation(&mut self, rotation: Quat);
}

/// Plain camera rig node: a local rotation and an eye offset relative to the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRigNode {
    pub local_rotation: Quat,
    pub eye_offset: Vec3,
}

impl Default for CameraRigNode {
    fn default() -> Self {
        Self {
            local_rotation: Quat::IDENTITY,
            eye_offset: DEFAULT_EYE_OFFSET,
        }
    }
}

impl CameraRigNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eye_offset(eye_offset: Vec3) -> Self {
        Self {
            eye_offset,
            ..Default::default()
        }
    }

    /// World rotation of the camera for a body with `body_rotation`.
    pub fn world_rotation(&self, body_rotation: Quat) -> Quat {
        body_rotation * self.local_rotation
    }

    /// World-space view direction (-Z of the camera).
    pub fn view_forward(&self, body_rotation: Quat) -> Vec3 {
        self.world_rotation(body_rotation) * Vec3::NEG_Z
    }

    /// World-space eye position.
    pub fn eye_position(&self, body_position: Vec3, body_rotation: Quat) -> Vec3 {
        body_position + body_rotation * self.eye_offset
    }
}

impl CameraRig for CameraRigNode {
    fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.local_rotation = rotation;
    }
}
