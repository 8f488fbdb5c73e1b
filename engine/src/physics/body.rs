//! Character body and motion resolution
//!
//! [`CharacterBody`] is the seam between the locomotion controller and the
//! physics engine: the controller submits a displacement, the body performs
//! the swept collision resolution and owns the resulting transform.
//!
//! [`CapsuleBody`] is the reference implementation. It approximates the
//! capsule by its bounding box and resolves the displacement one axis at a
//! time (Y, then X, then Z) against the static geometry of a shared
//! [`CollisionWorld`].

use std::sync::Arc;

use glam::{Quat, Vec3};

use super::collision::{Aabb, Axis};
use super::layers::LayerMask;
use super::world::CollisionWorld;

/// Capsule defaults: 2 m tall, 0.5 m radius.
pub const DEFAULT_CAPSULE_HEIGHT: f32 = 2.0;
pub const DEFAULT_CAPSULE_RADIUS: f32 = 0.5;

/// Which sides of the body were blocked during the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub below: bool,
    pub sides: bool,
    pub above: bool,
}

impl CollisionFlags {
    pub const NONE: CollisionFlags = CollisionFlags {
        below: false,
        sides: false,
        above: false,
    };

    pub fn any(&self) -> bool {
        self.below || self.sides || self.above
    }
}

/// External collision body the controller drives.
///
/// The body owns position and orientation. Orientation is written directly by
/// the look controller; position only changes through [`move_by`](Self::move_by).
pub trait CharacterBody {
    /// World position of the body origin (capsule center).
    fn position(&self) -> Vec3;

    /// World orientation of the body.
    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Sweeps the body by `displacement`, sliding along whatever it hits.
    fn move_by(&mut self, displacement: Vec3) -> CollisionFlags;
}

/// Kinematic capsule resolved against a static [`CollisionWorld`].
#[derive(Debug, Clone)]
pub struct CapsuleBody {
    position: Vec3,
    rotation: Quat,
    height: f32,
    radius: f32,
    collision_mask: LayerMask,
    world: Arc<CollisionWorld>,
}

impl CapsuleBody {
    /// Creates a body with the default 2 m x 0.5 m capsule colliding with every layer.
    pub fn new(world: Arc<CollisionWorld>, position: Vec3) -> Self {
        Self::with_dimensions(world, position, DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS)
    }

    /// Creates a body with a custom capsule. Height never drops below `2 * radius`.
    pub fn with_dimensions(
        world: Arc<CollisionWorld>,
        position: Vec3,
        height: f32,
        radius: f32,
    ) -> Self {
        let radius = radius.abs();
        Self {
            position,
            rotation: Quat::IDENTITY,
            height: height.abs().max(radius * 2.0),
            radius,
            collision_mask: LayerMask::ALL,
            world,
        }
    }

    /// Restricts which layers block this body.
    pub fn with_collision_mask(mut self, mask: LayerMask) -> Self {
        self.collision_mask = mask;
        self
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Lowest point of the capsule.
    pub fn feet_position(&self) -> Vec3 {
        self.position - Vec3::Y * (self.height * 0.5)
    }

    /// Bounding box of the capsule at the current position.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(
            self.position,
            Vec3::new(self.radius, self.height * 0.5, self.radius),
        )
    }

    fn sweep_axis(&self, axis: Axis, requested: f32) -> f32 {
        if requested == 0.0 {
            return 0.0;
        }
        let moving = self.bounds();
        self.world
            .blocking_bounds(self.collision_mask)
            .fold(requested, |offset, obstacle| obstacle.clip_offset(&moving, axis, offset))
    }
}

impl CharacterBody for CapsuleBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    fn move_by(&mut self, displacement: Vec3) -> CollisionFlags {
        let mut flags = CollisionFlags::NONE;

        for (axis, requested) in [
            (Axis::Y, displacement.y),
            (Axis::X, displacement.x),
            (Axis::Z, displacement.z),
        ] {
            let resolved = self.sweep_axis(axis, requested);
            if resolved != requested {
                match axis {
                    Axis::Y if requested < 0.0 => flags.below = true,
                    Axis::Y => flags.above = true,
                    _ => flags.sides = true,
                }
            }
            self.position += axis.vector(resolved);
        }

        flags
    }
}
