//! Collision Layers
//!
//! Every collider lives on exactly one layer (0..=31). Queries carry a
//! [`LayerMask`] and only see colliders whose layer bit is set.

use serde::{Deserialize, Serialize};

/// Number of addressable collision layers.
pub const LAYER_COUNT: u8 = 32;

/// The layer colliders land on when nothing else is specified.
pub const DEFAULT_LAYER: u8 = 0;

/// Bit set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches no layer at all.
    pub const NONE: LayerMask = LayerMask(0);

    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Only the default layer (`1 << 0`).
    pub const DEFAULT: LayerMask = LayerMask(1 << DEFAULT_LAYER);

    /// Mask containing a single layer. Layers past 31 yield an empty mask.
    pub fn from_layer(layer: u8) -> Self {
        if layer < LAYER_COUNT {
            LayerMask(1 << layer)
        } else {
            LayerMask::NONE
        }
    }

    /// Mask containing every listed layer.
    pub fn from_layers(layers: &[u8]) -> Self {
        layers
            .iter()
            .fold(LayerMask::NONE, |mask, &layer| mask.with_layer(layer))
    }

    /// Returns a copy with `layer` added.
    pub fn with_layer(self, layer: u8) -> Self {
        LayerMask(self.0 | LayerMask::from_layer(layer).0)
    }

    /// Returns a copy with `layer` removed.
    pub fn without_layer(self, layer: u8) -> Self {
        LayerMask(self.0 & !LayerMask::from_layer(layer).0)
    }

    /// Whether a collider on `layer` passes this mask.
    #[inline]
    pub fn contains(self, layer: u8) -> bool {
        layer < LAYER_COUNT && self.0 & (1 << layer) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::DEFAULT
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}
