//! Overlap queries against static geometry
//!
//! [`OverlapQuery`] is the seam the ground sensor talks to. Any physics
//! backend can implement it; [`CollisionWorld`] is the in-crate reference
//! implementation used by the simulator and the tests.

use std::collections::HashMap;

use glam::Vec3;

use super::collision::{Aabb, ColliderShape};
use super::layers::{DEFAULT_LAYER, LAYER_COUNT, LayerMask};

/// Stable identifier of a collider inside a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub u32);

/// Volumetric overlap query primitive.
///
/// Implementations must be pure with respect to static geometry: the same
/// arguments against the same geometry always return the same colliders.
pub trait OverlapQuery {
    /// All colliders on a layer in `mask` that touch the sphere.
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> Vec<ColliderHandle>;

    /// Cheaper form of [`overlap_sphere`](Self::overlap_sphere) for callers that
    /// only need to know whether anything was hit.
    fn any_overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        !self.overlap_sphere(center, radius, mask).is_empty()
    }
}

/// A static collider: geometry plus the layer it lives on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: ColliderShape,
    pub layer: u8,
}

impl Collider {
    /// Creates a collider on the default layer.
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            layer: DEFAULT_LAYER,
        }
    }

    /// Moves the collider to `layer`. Values past 31 clamp to 31.
    pub fn on_layer(mut self, layer: u8) -> Self {
        self.layer = layer.min(LAYER_COUNT - 1);
        self
    }
}

/// Static collision geometry keyed by handle.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    colliders: HashMap<ColliderHandle, Collider>,
    next_handle: u32,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Large flat slab whose top face sits at `height`.
    pub fn with_ground_plane(height: f32, half_size: f32) -> Self {
        let mut world = Self::new();
        world.add_box(
            Vec3::new(-half_size, height - 1.0, -half_size),
            Vec3::new(half_size, height, half_size),
        );
        world
    }

    pub fn insert(&mut self, collider: Collider) -> ColliderHandle {
        let handle = ColliderHandle(self.next_handle);
        self.next_handle += 1;
        self.colliders.insert(handle, collider);
        handle
    }

    /// Adds a box on the default layer spanning the two corners.
    pub fn add_box(&mut self, a: Vec3, b: Vec3) -> ColliderHandle {
        self.insert(Collider::new(ColliderShape::Box(Aabb::new(a, b))))
    }

    /// Adds a sphere on the default layer.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) -> ColliderHandle {
        self.insert(Collider::new(ColliderShape::Sphere { center, radius }))
    }

    pub fn remove(&mut self, handle: ColliderHandle) -> Option<Collider> {
        self.colliders.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Bounds of every collider on a layer in `mask`.
    pub fn blocking_bounds(&self, mask: LayerMask) -> impl Iterator<Item = Aabb> + '_ {
        self.colliders
            .values()
            .filter(move |collider| mask.contains(collider.layer))
            .map(|collider| collider.shape.bounds())
    }
}

impl OverlapQuery for CollisionWorld {
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> Vec<ColliderHandle> {
        let mut hits: Vec<ColliderHandle> = self
            .colliders
            .iter()
            .filter(|(_, collider)| mask.contains(collider.layer))
            .filter(|(_, collider)| collider.shape.overlaps_sphere(center, radius))
            .map(|(handle, _)| *handle)
            .collect();
        // HashMap order is unspecified; keep query results deterministic
        hits.sort_unstable();
        hits
    }

    fn any_overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.colliders.values().any(|collider| {
            mask.contains(collider.layer) && collider.shape.overlaps_sphere(center, radius)
        })
    }
}
