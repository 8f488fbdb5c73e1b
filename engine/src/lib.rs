//! Strider Engine Library
//!
//! First-person character locomotion for a 3D world: grounded detection,
//! jumping under gravity, smoothed yaw-relative walking, and mouse look that
//! yaws the body while pitching only the camera.
//!
//! # Modules
//!
//! - [`physics`] - Collision world, overlap queries, and the capsule body's swept move
//! - [`input`] - Action bindings: movement axis, look delta, jump events
//! - [`player`] - Ground sensor, velocity integration, locomotion controller, character glue
//! - [`camera`] - Look controller and camera rig
//! - [`config`] - Tuning parameters with JSON loading and validation
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use strider_engine::camera::CameraRigNode;
//! use strider_engine::config::LocomotionConfig;
//! use strider_engine::input::{ActionMap, MOVE_FORWARD};
//! use strider_engine::physics::{CapsuleBody, CollisionWorld, Vec3};
//! use strider_engine::player::FirstPersonCharacter;
//!
//! let world = Arc::new(CollisionWorld::with_ground_plane(0.0, 100.0));
//! let mut body = CapsuleBody::new(world.clone(), Vec3::new(0.0, 1.0, 0.0));
//! let mut rig = CameraRigNode::new();
//! let mut input = ActionMap::new();
//! let mut character = FirstPersonCharacter::new(LocomotionConfig::default())?;
//!
//! character.activate(&mut input);
//! input.set_movement(MOVE_FORWARD);
//! character.frame(1.0 / 60.0, &mut input, &*world, &mut body, &mut rig);
//! input.end_frame();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

pub use camera::{CameraRig, CameraRigNode, LookController};
pub use config::{ConfigError, LocomotionConfig};
pub use input::{ActionMap, InputAction, InputBindings};
pub use physics::{CapsuleBody, CharacterBody, CollisionWorld, OverlapQuery};
pub use player::{CharacterState, FirstPersonCharacter, LocomotionController, MotionFrame};
