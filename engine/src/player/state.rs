//! Serializable snapshot of a character for logging and inspection.

use glam::{Quat, Vec3};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharacterState {
    /// Body origin (capsule center)
    pub position: Vec3,
    pub rotation: Quat,
    pub horizontal_velocity: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    /// Camera pitch in degrees, positive looks down
    pub pitch: f32,
}

impl CharacterState {
    /// Body yaw in degrees. Positive is a turn to the left (counter-clockwise seen from above).
    pub fn yaw_degrees(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(glam::EulerRot::YXZ);
        yaw.to_degrees()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
