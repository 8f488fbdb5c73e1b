//! Collision primitives
//!
//! Shape math shared by the reference [`CollisionWorld`](super::world::CollisionWorld)
//! and [`CapsuleBody`](super::body::CapsuleBody): axis-aligned boxes, spheres,
//! overlap tests and per-axis sweep clipping.
//!
//! # Sweep clipping
//!
//! A moving box is resolved one axis at a time. For each axis the requested
//! offset is shortened so the box stops flush against any static box it
//! would otherwise enter. Boxes that merely touch on a perpendicular face do
//! not block each other.
//!
//! # Example
//!
//! ```ignore
//! use strider_engine::physics::collision::{Aabb, Axis};
//! use glam::Vec3;
//!
//! let floor = Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0));
//! let feet = Aabb::from_center_half_extents(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.5, 1.0, 0.5));
//!
//! // Falling 3 meters only moves the box down to the floor surface.
//! assert_eq!(floor.clip_offset(&feet, Axis::Y, -3.0), 0.0);
//! ```

use glam::Vec3;

/// Slack used when deciding whether a moving box starts outside a static box.
/// Absorbs the rounding left over from the previous frame's clip.
pub const CONTACT_EPSILON: f32 = 1e-4;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes perpendicular to this one.
    #[inline]
    fn others(self) -> [usize; 2] {
        match self {
            Axis::X => [1, 2],
            Axis::Y => [0, 2],
            Axis::Z => [0, 1],
        }
    }

    /// Unit vector along this axis scaled by `amount`.
    pub fn vector(self, amount: f32) -> Vec3 {
        match self {
            Axis::X => Vec3::new(amount, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, amount, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, amount),
        }
    }
}

// =============================================================================
// Aabb
// =============================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the box moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Closest point inside the box to `point`.
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Overlap on a single axis deeper than `slack`. Touching faces do not count.
    #[inline]
    fn overlaps_on(&self, other: &Aabb, axis: usize, slack: f32) -> bool {
        self.min[axis] < other.max[axis] - slack && self.max[axis] > other.min[axis] + slack
    }

    /// Strict volumetric overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| self.overlaps_on(other, axis, 0.0))
    }

    /// Shortens `offset` along `axis` so `moving` stops flush against `self`.
    ///
    /// Returns `offset` untouched when the boxes do not overlap on the two
    /// perpendicular axes, or when `moving` does not start on the near side
    /// of `self` along the direction of travel.
    pub fn clip_offset(&self, moving: &Aabb, axis: Axis, offset: f32) -> f32 {
        // A body resting a hair inside the floor must still slide along it
        let [a, b] = axis.others();
        if !self.overlaps_on(moving, a, CONTACT_EPSILON)
            || !self.overlaps_on(moving, b, CONTACT_EPSILON)
        {
            return offset;
        }

        let i = axis.index();
        if offset > 0.0 && moving.max[i] <= self.min[i] + CONTACT_EPSILON {
            offset.min(self.min[i] - moving.max[i])
        } else if offset < 0.0 && moving.min[i] >= self.max[i] - CONTACT_EPSILON {
            offset.max(self.max[i] - moving.min[i])
        } else {
            offset
        }
    }
}

// =============================================================================
// Shapes
// =============================================================================

/// Static collider geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Box(Aabb),
    Sphere { center: Vec3, radius: f32 },
}

impl ColliderShape {
    /// Bounding box of the shape. Spheres block motion as their bounds.
    pub fn bounds(&self) -> Aabb {
        match *self {
            ColliderShape::Box(aabb) => aabb,
            ColliderShape::Sphere { center, radius } => {
                Aabb::from_center_half_extents(center, Vec3::splat(radius))
            }
        }
    }

    /// Whether a query sphere touches or enters this shape.
    pub fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        match *self {
            ColliderShape::Box(aabb) => sphere_aabb_overlap(center, radius, &aabb),
            ColliderShape::Sphere {
                center: other_center,
                radius: other_radius,
            } => sphere_sphere_overlap(center, radius, other_center, other_radius),
        }
    }
}

/// Sphere against box, closest-point test. Touching counts as overlap.
pub fn sphere_aabb_overlap(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(center);
    closest.distance_squared(center) <= radius * radius
}

/// Sphere against sphere. Touching counts as overlap.
pub fn sphere_sphere_overlap(a_center: Vec3, a_radius: f32, b_center: Vec3, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_center.distance_squared(b_center) <= reach * reach
}
