//! Math type re-exports from glam
//!
//! The controller, the reference collision world and the camera rig all
//! share these types, so they are re-exported here once.

pub use glam::{EulerRot, Quat, Vec2, Vec3};

/// World up axis. Gravity pulls along `-UP`; yaw rotates about `UP`.
pub const UP: Vec3 = Vec3::Y;
