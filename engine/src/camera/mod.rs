//! Camera Module
//!
//! First-person look control and the camera rig it drives.
//! Window-system agnostic: only camera state and math live here.

pub mod look_controller;
pub mod rig;

pub use look_controller::{LookController, PITCH_LIMIT};
pub use rig::{CameraRig, CameraRigNode, DEFAULT_EYE_OFFSET};
