//! Locomotion Controller
//!
//! Runs the per-frame movement procedure for one character:
//!
//! 1. grounded = ground probe AND vertical velocity < 0
//! 2. integrate vertical velocity (gravity, or snap when grounded)
//! 3. read the movement axis
//! 4. blend horizontal velocity toward the input target
//! 5. motion = horizontal velocity + up * vertical velocity
//! 6. submit motion * dt to the body's swept move
//!
//! Collision response is the body's job; this controller only decides what
//! motion to ask for.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strider_engine::config::LocomotionConfig;
//! use strider_engine::player::LocomotionController;
//!
//! let mut controller = LocomotionController::new(LocomotionConfig::default());
//!
//! // Jump press arrives from the input system
//! controller.on_jump_requested();
//!
//! // Each frame:
//! let frame = controller.update(delta_time, &actions, &world, &mut body);
//! ```

use glam::Vec3;

use super::ground_sensor::GroundSensor;
use super::horizontal_velocity::HorizontalVelocitySmoother;
use super::vertical_velocity::VerticalVelocityIntegrator;
use crate::config::LocomotionConfig;
use crate::input::InputBindings;
use crate::physics::{CharacterBody, CollisionFlags, OverlapQuery, UP};

/// What one locomotion step asked for and what the body reported back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Composed velocity (horizontal + vertical), m/s
    pub motion: Vec3,
    /// Displacement submitted to the body (`motion * dt`)
    pub displacement: Vec3,
    /// Grounded state used for this step
    pub grounded: bool,
    /// Sides the body reported as blocked
    pub collisions: CollisionFlags,
}

#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    sensor: GroundSensor,
    vertical: VerticalVelocityIntegrator,
    horizontal: HorizontalVelocitySmoother,
    /// Result of the latest grounded evaluation; gates jump requests
    grounded: bool,
    last_frame: Option<MotionFrame>,
}

impl LocomotionController {
    /// Creates a controller at rest. `config` is used as-is; validate it first
    /// when it comes from outside.
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            sensor: GroundSensor::from_config(&config),
            vertical: VerticalVelocityIntegrator::new(&config),
            horizontal: HorizontalVelocitySmoother::new(),
            grounded: false,
            last_frame: None,
            config,
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Grounded state from the most recent update.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical.vertical_velocity()
    }

    pub fn horizontal_velocity(&self) -> Vec3 {
        self.horizontal.velocity()
    }

    /// The most recent step, if any has run.
    pub fn last_frame(&self) -> Option<&MotionFrame> {
        self.last_frame.as_ref()
    }

    /// Jump request from the input system. Accepted only while grounded,
    /// using the grounded state of the latest update.
    pub fn on_jump_requested(&mut self) -> bool {
        let accepted = self.vertical.on_jump_requested(self.grounded);
        if accepted {
            log::debug!(
                "jump accepted, vertical velocity {:.2}",
                self.vertical.vertical_velocity()
            );
        } else {
            log::debug!("jump ignored while airborne");
        }
        accepted
    }

    /// Reads the movement axis from `input` and runs one step.
    pub fn update<I, W, B>(&mut self, dt: f32, input: &I, world: &W, body: &mut B) -> MotionFrame
    where
        I: InputBindings + ?Sized,
        W: OverlapQuery + ?Sized,
        B: CharacterBody + ?Sized,
    {
        self.step(dt, input.read_movement(), world, body)
    }

    /// Runs one step with an explicit local-space movement axis.
    pub fn step<W, B>(&mut self, dt: f32, movement: Vec3, world: &W, body: &mut B) -> MotionFrame
    where
        W: OverlapQuery + ?Sized,
        B: CharacterBody + ?Sized,
    {
        let was_grounded = self.grounded;
        self.grounded = self
            .sensor
            .is_grounded(world, body.position(), self.vertical.vertical_velocity());
        if self.grounded != was_grounded {
            if self.grounded {
                log::debug!("landed at {:?}", body.position());
            } else {
                log::debug!("left ground at {:?}", body.position());
            }
        }

        self.vertical.integrate(self.grounded, dt);

        self.horizontal.update(
            movement,
            body.rotation(),
            self.config.horizontal_speed,
            self.config.blend_weight(dt),
        );

        let motion = self.horizontal.velocity() + UP * self.vertical.vertical_velocity();
        let displacement = motion * dt;
        let collisions = body.move_by(displacement);
        log::trace!("motion {motion:?} grounded={} collisions={collisions:?}", self.grounded);

        let frame = MotionFrame {
            motion,
            displacement,
            grounded: self.grounded,
            collisions,
        };
        self.last_frame = Some(frame);
        frame
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(LocomotionConfig::default())
    }
}
