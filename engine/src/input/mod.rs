//! Input Module
//!
//! The input boundary of the character controller. The controller never
//! looks at keys or devices; it reads logical actions through
//! [`InputBindings`] and receives jump presses as queued performed events.
//!
//! # Example
//!
//! ```rust,ignore
//! use strider_engine::input::{ActionMap, InputAction, InputBindings, MOVE_FORWARD};
//!
//! let mut actions = ActionMap::new();
//! actions.enable();
//!
//! // Device layer writes held values and fires presses
//! actions.set_movement(MOVE_FORWARD);
//! actions.press(InputAction::Jump);
//! ```

pub mod actions;

pub use actions::{
    ActionMap, InputAction, InputBindings, SubscriptionId, MOVE_FORWARD, MOVE_RIGHT,
};
