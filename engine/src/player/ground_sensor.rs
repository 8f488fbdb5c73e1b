//! Ground Sensor
//!
//! Detects solid geometry just below the character with a sphere overlap.
//! The raw probe says nothing about vertical motion; the locomotion
//! controller combines it with the velocity sign gate (see
//! [`GroundSensor::is_grounded`]).

use glam::Vec3;

use crate::config::LocomotionConfig;
use crate::physics::{LayerMask, OverlapQuery, UP};

/// Raw ground probe: true iff anything on `layer_mask` overlaps the sphere of
/// `radius` centered `offset` meters below `position`.
///
/// Pure with respect to the world's static geometry.
pub fn probe<W: OverlapQuery + ?Sized>(
    world: &W,
    position: Vec3,
    radius: f32,
    offset: f32,
    layer_mask: LayerMask,
) -> bool {
    world.any_overlap_sphere(position - UP * offset, radius, layer_mask)
}

/// Probe parameters bound to one character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    pub radius: f32,
    pub offset: f32,
    pub layer_mask: LayerMask,
}

impl GroundSensor {
    pub fn new(radius: f32, offset: f32, layer_mask: LayerMask) -> Self {
        Self {
            radius,
            offset,
            layer_mask,
        }
    }

    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self::new(
            config.ground_probe_radius,
            config.ground_probe_offset,
            config.ground_layer_mask,
        )
    }

    /// World-space center of the probe sphere for a body at `position`.
    pub fn probe_center(&self, position: Vec3) -> Vec3 {
        position - UP * self.offset
    }

    /// Raw overlap result.
    pub fn probe<W: OverlapQuery + ?Sized>(&self, world: &W, position: Vec3) -> bool {
        probe(world, position, self.radius, self.offset, self.layer_mask)
    }

    /// Composite grounded state: near ground AND not moving upward.
    ///
    /// A character that just received a jump impulse still overlaps the probe
    /// for a frame or two; the sign gate keeps it from reading as grounded.
    pub fn is_grounded<W: OverlapQuery + ?Sized>(
        &self,
        world: &W,
        position: Vec3,
        vertical_velocity: f32,
    ) -> bool {
        self.probe(world, position) && vertical_velocity < 0.0
    }
}

impl Default for GroundSensor {
    fn default() -> Self {
        Self::from_config(&LocomotionConfig::default())
    }
}
