//! Locomotion Sim - headless first-person character run
//!
//! Run with: `cargo run --bin locomotion_sim [config.json]`
//!
//! Drops a character onto a flat floor with a raised block ahead, then plays
//! a scripted input sequence at 60 Hz: settle, walk forward, turn, jump, look
//! up past the pitch limit, and walk into the block. Every phase logs a JSON
//! snapshot of the character. Set `RUST_LOG=debug` for ground transitions and
//! jump events, `RUST_LOG=trace` for every frame.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};

use strider_engine::camera::CameraRigNode;
use strider_engine::config::LocomotionConfig;
use strider_engine::input::{ActionMap, InputAction, MOVE_FORWARD, MOVE_RIGHT};
use strider_engine::physics::{CapsuleBody, CollisionWorld};
use strider_engine::player::FirstPersonCharacter;

const FRAME_DT: f32 = 1.0 / 60.0;

/// One scripted phase of held input.
struct Phase {
    name: &'static str,
    frames: u32,
    movement: Vec3,
    look: Vec2,
    jump: bool,
}

impl Phase {
    fn idle(name: &'static str, frames: u32) -> Self {
        Self {
            name,
            frames,
            movement: Vec3::ZERO,
            look: Vec2::ZERO,
            jump: false,
        }
    }

    fn moving(mut self, movement: Vec3) -> Self {
        self.movement = movement;
        self
    }

    fn looking(mut self, look: Vec2) -> Self {
        self.look = look;
        self
    }

    fn jumping(mut self) -> Self {
        self.jump = true;
        self
    }
}

fn script() -> Vec<Phase> {
    vec![
        Phase::idle("settle", 30),
        Phase::idle("walk forward", 60).moving(MOVE_FORWARD),
        Phase::idle("turn right", 30).looking(Vec2::new(15.0, 0.0)),
        Phase::idle("strafe", 30).moving(MOVE_RIGHT),
        Phase::idle("jump", 1).jumping(),
        Phase::idle("airborne", 60),
        Phase::idle("look up", 30).looking(Vec2::new(0.0, 40.0)),
        Phase::idle("look down", 30).looking(Vec2::new(0.0, -40.0)),
        Phase::idle("walk diagonal", 90).moving(MOVE_FORWARD + MOVE_RIGHT),
        Phase::idle("stop", 60),
    ]
}

fn load_config() -> Result<LocomotionConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => LocomotionConfig::load(&path)
            .with_context(|| format!("loading locomotion config from {}", path.display())),
        None => Ok(LocomotionConfig::default()),
    }
}

fn build_world() -> CollisionWorld {
    let mut world = CollisionWorld::with_ground_plane(0.0, 200.0);
    // Block in the walking path
    world.add_box(Vec3::new(-3.0, 0.0, -12.0), Vec3::new(3.0, 0.5, -6.0));
    world
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = load_config()?;
    log::info!("config: {}", config.to_json_pretty().context("serializing config")?);

    let world = Arc::new(build_world());
    let mut body = CapsuleBody::new(world.clone(), Vec3::new(0.0, 1.0, 0.0));
    let mut rig = CameraRigNode::new();
    let mut input = ActionMap::new();
    let mut character = FirstPersonCharacter::new(config).context("building character")?;

    // Deactivates when it goes out of scope, including on an early error return
    let mut active = character.activate_scoped(&mut input);

    let mut frame_index = 0u64;
    for phase in script() {
        active.input_mut().set_movement(phase.movement);
        if phase.jump {
            active.input_mut().press(InputAction::Jump);
        }
        for _ in 0..phase.frames {
            active.input_mut().set_camera_rotation(phase.look);
            if let Some(motion) = active.frame(FRAME_DT, &*world, &mut body, &mut rig) {
                log::trace!("frame {frame_index}: {motion:?}");
            }
            active.input_mut().end_frame();
            frame_index += 1;
        }

        let state = active.character().state(&body);
        log::info!(
            "{:<14} {}",
            phase.name,
            state.to_json().context("serializing character state")?
        );
    }

    drop(active);
    log::info!("ran {frame_index} frames");
    Ok(())
}
