//! Input Actions
//!
//! Logical input channels the character consumes, and [`ActionMap`], a small
//! in-process stand-in for a platform input system. A real binding layer
//! (keyboard/gamepad/remapping) implements [`InputBindings`] instead.
//!
//! # Channels
//!
//! - `Movement` - held 3D direction in the character's local space
//!   (+X right, +Y up, -Z forward)
//! - `CameraRotation` - 2D look delta for this frame (x = yaw, y = pitch)
//! - `Jump` - edge-triggered, delivered to subscribers as performed events

use std::collections::HashMap;

use glam::{Vec2, Vec3};

/// Local-space movement direction for "forward".
pub const MOVE_FORWARD: Vec3 = Vec3::NEG_Z;
/// Local-space movement direction for "right".
pub const MOVE_RIGHT: Vec3 = Vec3::X;

/// Logical input actions consumed by the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Held movement axis (Vec3)
    Movement,
    /// Look delta (Vec2)
    CameraRotation,
    /// Discrete jump press
    Jump,
}

impl InputAction {
    /// Whether the action produces performed events rather than a held value.
    pub fn is_discrete(self) -> bool {
        matches!(self, InputAction::Jump)
    }
}

/// Handle for one event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The input system as seen by the character.
///
/// Performed events are queued per subscription and drained by the subscriber
/// once per tick, so a press that lands between two frames is seen by the next
/// frame and never twice.
pub trait InputBindings {
    fn enable(&mut self);
    fn disable(&mut self);
    fn is_enabled(&self) -> bool;

    /// Current movement axis in local space. Zero while disabled.
    fn read_movement(&self) -> Vec3;

    /// Look delta for this frame. Zero while disabled.
    fn read_camera_rotation(&self) -> Vec2;

    /// Starts queueing performed events of `action` for the caller.
    fn subscribe(&mut self, action: InputAction) -> SubscriptionId;

    /// Stops a subscription. Returns false if it was not registered.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Returns and clears the number of performed events queued for `id`.
    fn take_performed(&mut self, id: SubscriptionId) -> u32;
}

#[derive(Debug, Clone, Copy)]
struct Subscription {
    action: InputAction,
    pending: u32,
}

/// In-process action map: holds sampled axis values and queues discrete
/// presses for every subscriber.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    enabled: bool,
    movement: Vec3,
    camera_rotation: Vec2,
    subscriptions: HashMap<SubscriptionId, Subscription>,
    next_subscription: u64,
}

impl ActionMap {
    /// Creates a disabled action map with neutral values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the held movement axis.
    pub fn set_movement(&mut self, movement: Vec3) {
        self.movement = movement;
    }

    /// Replaces this frame's look delta.
    pub fn set_camera_rotation(&mut self, delta: Vec2) {
        self.camera_rotation = delta;
    }

    /// Adds raw pointer motion to this frame's look delta.
    pub fn accumulate_camera_rotation(&mut self, delta: Vec2) {
        self.camera_rotation += delta;
    }

    /// Clears per-frame deltas. Call once after the frame consumed them.
    pub fn end_frame(&mut self) {
        self.camera_rotation = Vec2::ZERO;
    }

    /// Fires a discrete action. Returns how many subscribers were notified.
    ///
    /// Presses are dropped while the map is disabled, and held actions have
    /// no performed events.
    pub fn press(&mut self, action: InputAction) -> usize {
        if !self.enabled || !action.is_discrete() {
            return 0;
        }
        let mut notified = 0;
        for subscription in self.subscriptions.values_mut() {
            if subscription.action == action {
                subscription.pending = subscription.pending.saturating_add(1);
                notified += 1;
            }
        }
        log::trace!("{action:?} performed, {notified} subscriber(s)");
        notified
    }

    /// Number of live subscriptions for `action`.
    pub fn subscriber_count(&self, action: InputAction) -> usize {
        self.subscriptions
            .values()
            .filter(|subscription| subscription.action == action)
            .count()
    }
}

impl InputBindings for ActionMap {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
        for subscription in self.subscriptions.values_mut() {
            subscription.pending = 0;
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn read_movement(&self) -> Vec3 {
        if self.enabled { self.movement } else { Vec3::ZERO }
    }

    fn read_camera_rotation(&self) -> Vec2 {
        if self.enabled {
            self.camera_rotation
        } else {
            Vec2::ZERO
        }
    }

    fn subscribe(&mut self, action: InputAction) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.insert(id, Subscription { action, pending: 0 });
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    fn take_performed(&mut self, id: SubscriptionId) -> u32 {
        self.subscriptions
            .get_mut(&id)
            .map(|subscription| std::mem::take(&mut subscription.pending))
            .unwrap_or(0)
    }
}
