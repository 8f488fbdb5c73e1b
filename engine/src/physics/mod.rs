//! Physics boundary
//!
//! The locomotion controller does not simulate collisions itself. It talks to
//! two collaborator traits defined here:
//!
//! - [`OverlapQuery`] - volumetric overlap query used for ground detection
//! - [`CharacterBody`] - swept motion resolution plus the body transform
//!
//! Reference implementations ([`CollisionWorld`], [`CapsuleBody`]) back the
//! headless simulator and the test suite.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, accelerations in m/s².
//! World up is +Y; forward is -Z.
//!
//! # Submodules
//!
//! - [`types`] - Math types re-exported from glam
//! - [`layers`] - Collision layer masks
//! - [`collision`] - Boxes, spheres, overlap tests and sweep clipping
//! - [`world`] - Overlap query trait and static collision world
//! - [`body`] - Character body trait and kinematic capsule

pub mod body;
pub mod collision;
pub mod layers;
pub mod types;
pub mod world;

pub use body::{CapsuleBody, CharacterBody, CollisionFlags};
pub use collision::{Aabb, Axis, ColliderShape};
pub use layers::LayerMask;
pub use types::{EulerRot, Quat, UP, Vec2, Vec3};
pub use world::{Collider, ColliderHandle, CollisionWorld, OverlapQuery};
