//! Player Module
//!
//! First-person character locomotion.
//!
//! # Components
//!
//! - [`GroundSensor`] - Sphere probe below the body; grounded needs contact and a falling velocity
//! - [`VerticalVelocityIntegrator`] - Gravity, jump impulse and the grounded snap
//! - [`HorizontalVelocitySmoother`] - Yaw-relative walking velocity with exponential blending
//! - [`LocomotionController`] - The per-frame movement procedure
//! - [`FirstPersonCharacter`] - Locomotion plus look, with the input lifecycle
//! - [`ActiveCharacter`] - Scoped activation that deactivates on drop
//! - [`CharacterState`] - Serializable snapshot

pub mod character;
pub mod ground_sensor;
pub mod horizontal_velocity;
pub mod movement_controller;
pub mod state;
pub mod vertical_velocity;

pub use character::{ActiveCharacter, FirstPersonCharacter};
pub use ground_sensor::GroundSensor;
pub use horizontal_velocity::{HorizontalVelocitySmoother, yaw_only};
pub use movement_controller::{LocomotionController, MotionFrame};
pub use state::CharacterState;
pub use vertical_velocity::VerticalVelocityIntegrator;
