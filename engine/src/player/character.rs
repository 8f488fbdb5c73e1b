//! First-Person Character
//!
//! Glues locomotion and look together for one player-controlled character
//! and owns its input lifecycle. While active it holds a Jump subscription
//! on the input bindings; deactivating releases it and disables the
//! bindings. An inactive character does not advance.
//!
//! [`FirstPersonCharacter::activate_scoped`] returns an [`ActiveCharacter`]
//! guard that deactivates on drop. With the manual
//! [`activate`](FirstPersonCharacter::activate) call, a matching
//! [`deactivate`](FirstPersonCharacter::deactivate) is mandatory: the
//! character does not keep a handle to the bindings, so dropping it while
//! active leaves the subscription registered.
//!
//! Frame order: pending jump presses, then locomotion, then look. Movement
//! therefore steers with the yaw from the previous frame.

use glam::{Quat, Vec3};

use super::movement_controller::{LocomotionController, MotionFrame};
use super::state::CharacterState;
use crate::camera::{CameraRig, LookController};
use crate::config::{ConfigError, LocomotionConfig};
use crate::input::{InputAction, InputBindings, SubscriptionId};
use crate::physics::{CharacterBody, OverlapQuery};

#[derive(Debug)]
pub struct FirstPersonCharacter {
    locomotion: LocomotionController,
    look: LookController,
    jump_subscription: Option<SubscriptionId>,
}

impl FirstPersonCharacter {
    /// Builds an inactive character. Fails if `config` does not validate.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            look: LookController::from_config(&config),
            locomotion: LocomotionController::new(config),
            jump_subscription: None,
        })
    }

    pub fn locomotion(&self) -> &LocomotionController {
        &self.locomotion
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    pub fn is_active(&self) -> bool {
        self.jump_subscription.is_some()
    }

    /// Enables `input` and subscribes to Jump. Returns false if already active.
    pub fn activate<I: InputBindings + ?Sized>(&mut self, input: &mut I) -> bool {
        if self.is_active() {
            log::warn!("character already active");
            return false;
        }
        input.enable();
        self.jump_subscription = Some(input.subscribe(InputAction::Jump));
        log::info!("character activated");
        true
    }

    /// Activates and returns a guard that deactivates when dropped, even if
    /// the character was already active before the call.
    pub fn activate_scoped<'a, I: InputBindings + ?Sized>(
        &'a mut self,
        input: &'a mut I,
    ) -> ActiveCharacter<'a, I> {
        self.activate(input);
        ActiveCharacter {
            character: self,
            input,
        }
    }

    /// Unsubscribes from Jump and disables `input`. Returns false if already inactive.
    pub fn deactivate<I: InputBindings + ?Sized>(&mut self, input: &mut I) -> bool {
        let Some(id) = self.jump_subscription.take() else {
            log::warn!("character already inactive");
            return false;
        };
        if !input.unsubscribe(id) {
            log::warn!("jump subscription {id:?} was not registered");
        }
        input.disable();
        log::info!("character deactivated");
        true
    }

    /// Direct jump request, bypassing the input bindings.
    pub fn on_jump_requested(&mut self) -> bool {
        self.locomotion.on_jump_requested()
    }

    /// Runs one frame. Returns `None` without touching anything while inactive.
    pub fn frame<I, W, B, R>(
        &mut self,
        dt: f32,
        input: &mut I,
        world: &W,
        body: &mut B,
        rig: &mut R,
    ) -> Option<MotionFrame>
    where
        I: InputBindings + ?Sized,
        W: OverlapQuery + ?Sized,
        B: CharacterBody + ?Sized,
        R: CameraRig + ?Sized,
    {
        let id = self.jump_subscription?;

        for _ in 0..input.take_performed(id) {
            self.locomotion.on_jump_requested();
        }

        let motion = self.locomotion.update(dt, &*input, world, body);
        self.look.update(input.read_camera_rotation(), body, rig);
        Some(motion)
    }

    pub fn state<B: CharacterBody + ?Sized>(&self, body: &B) -> CharacterState {
        CharacterState {
            position: body.position(),
            rotation: body.rotation(),
            horizontal_velocity: self.locomotion.horizontal_velocity(),
            vertical_velocity: self.locomotion.vertical_velocity(),
            grounded: self.locomotion.is_grounded(),
            pitch: self.look.pitch(),
        }
    }

    /// Camera world rotation for a body rotation and the current pitch.
    pub fn view_rotation(&self, body_rotation: Quat) -> Quat {
        body_rotation * LookController::pitch_rotation(self.look.pitch())
    }

    /// World-space view direction.
    pub fn view_forward(&self, body_rotation: Quat) -> Vec3 {
        self.view_rotation(body_rotation) * Vec3::NEG_Z
    }
}

impl Drop for FirstPersonCharacter {
    fn drop(&mut self) {
        if let Some(id) = self.jump_subscription {
            log::warn!("character dropped while active, subscription {id:?} left registered");
        }
    }
}

/// An activated character bound to its input bindings.
///
/// The bindings stay reachable through [`input_mut`](Self::input_mut) for the
/// device layer. Dropping the guard deactivates the character.
pub struct ActiveCharacter<'a, I: InputBindings + ?Sized> {
    character: &'a mut FirstPersonCharacter,
    input: &'a mut I,
}

impl<I: InputBindings + ?Sized> ActiveCharacter<'_, I> {
    pub fn character(&self) -> &FirstPersonCharacter {
        &*self.character
    }

    pub fn input(&self) -> &I {
        &*self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut *self.input
    }

    /// Runs one frame against the bound input.
    pub fn frame<W, B, R>(
        &mut self,
        dt: f32,
        world: &W,
        body: &mut B,
        rig: &mut R,
    ) -> Option<MotionFrame>
    where
        W: OverlapQuery + ?Sized,
        B: CharacterBody + ?Sized,
        R: CameraRig + ?Sized,
    {
        self.character.frame(dt, &mut *self.input, world, body, rig)
    }
}

impl<I: InputBindings + ?Sized> Drop for ActiveCharacter<'_, I> {
    fn drop(&mut self) {
        self.character.deactivate(&mut *self.input);
    }
}
