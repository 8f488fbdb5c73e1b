//! Locomotion Tests - Grounding, Jumping, Walking
//!
//! End-to-end runs of the character on a collision world at 60 Hz.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use strider_engine::camera::CameraRigNode;
use strider_engine::config::LocomotionConfig;
use strider_engine::input::{ActionMap, InputAction, InputBindings, MOVE_FORWARD};
use strider_engine::physics::{
    Aabb, CapsuleBody, CharacterBody, Collider, ColliderShape, CollisionWorld,
};
use strider_engine::player::{FirstPersonCharacter, LocomotionController, MotionFrame};

const DT: f32 = 1.0 / 60.0;

struct Scene {
    world: Arc<CollisionWorld>,
    body: CapsuleBody,
    rig: CameraRigNode,
    input: ActionMap,
    character: FirstPersonCharacter,
}

impl Scene {
    fn on_flat_ground(config: LocomotionConfig) -> Self {
        let world = Arc::new(CollisionWorld::with_ground_plane(0.0, 500.0));
        let mut scene = Self {
            body: CapsuleBody::new(world.clone(), Vec3::new(0.0, 1.0, 0.0)),
            world,
            rig: CameraRigNode::new(),
            input: ActionMap::new(),
            character: FirstPersonCharacter::new(config).unwrap(),
        };
        assert!(scene.character.activate(&mut scene.input));
        scene
    }

    fn frame(&mut self) -> MotionFrame {
        let frame = self
            .character
            .frame(DT, &mut self.input, &*self.world, &mut self.body, &mut self.rig)
            .expect("character is active");
        self.input.end_frame();
        frame
    }

    /// Runs idle frames until grounded.
    fn settle(&mut self) {
        for _ in 0..10 {
            if self.frame().grounded {
                return;
            }
        }
        panic!("character never grounded");
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        if self.character.is_active() {
            self.character.deactivate(&mut self.input);
        }
    }
}

// ============================================================================
// Resting
// ============================================================================

#[test]
fn test_rest_on_flat_ground() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();

    for _ in 0..120 {
        let frame = scene.frame();
        assert!(frame.grounded);
        assert_eq!(frame.motion, Vec3::new(0.0, -4.0, 0.0));
        assert_eq!(scene.character.locomotion().vertical_velocity(), -4.0);
        assert_eq!(scene.character.locomotion().horizontal_velocity(), Vec3::ZERO);
    }
    assert!((scene.body.position().y - 1.0).abs() < 1e-3);
}

#[test]
fn test_snap_velocity_is_configurable() {
    let config = LocomotionConfig {
        grounded_snap_velocity: -2.0,
        ..Default::default()
    };
    let mut scene = Scene::on_flat_ground(config);
    scene.settle();
    assert_eq!(scene.frame().motion.y, -2.0);
}

#[test]
fn test_probe_ignores_other_layers() {
    // Ground on layer 3 while the probe only looks at layer 0
    let mut world = CollisionWorld::new();
    let floor = Collider::new(ColliderShape::Box(Aabb::new(
        Vec3::new(-50.0, -1.0, -50.0),
        Vec3::new(50.0, 0.0, 50.0),
    )))
    .on_layer(3);
    world.insert(floor);
    let world = Arc::new(world);
    let mut body = CapsuleBody::new(world.clone(), Vec3::new(0.0, 1.0, 0.0));
    let mut controller = LocomotionController::default();

    for _ in 0..30 {
        let frame = controller.step(DT, Vec3::ZERO, world.as_ref(), &mut body);
        assert!(!frame.grounded);
    }
    // The body still stands on the floor; only the probe ignores it
    assert!((body.position().y - 1.0).abs() < 1e-3);
}

// ============================================================================
// Jumping
// ============================================================================

#[test]
fn test_jump_arc() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();

    assert!(scene.character.on_jump_requested());
    assert_eq!(scene.character.locomotion().vertical_velocity(), 12.0);

    let mut expected = 12.0f32;
    let mut crossed = false;
    for _ in 0..200 {
        let frame = scene.frame();
        if frame.grounded {
            break;
        }
        expected -= 29.43 * DT;
        let vv = scene.character.locomotion().vertical_velocity();
        assert!((vv - expected).abs() < 1e-3, "vv {vv} expected {expected}");
        if vv < 0.0 {
            crossed = true;
        }
    }
    assert!(crossed);

    // Landed: snapped, and the snap settles the body onto the floor
    assert!(scene.character.locomotion().is_grounded());
    assert_eq!(scene.character.locomotion().vertical_velocity(), -4.0);
    for _ in 0..30 {
        assert!(scene.frame().grounded);
    }
    assert!((scene.body.position().y - 1.0).abs() < 1e-3);
}

#[test]
fn test_not_grounded_while_rising() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();
    scene.input.press(InputAction::Jump);

    // Probe still touches the floor on the first frames, yet rising blocks grounded
    for _ in 0..5 {
        assert!(!scene.frame().grounded);
    }
    assert!(!scene.character.on_jump_requested());
}

#[test]
fn test_jump_pressed_while_airborne_is_dropped() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    // No settle: first frame is never grounded
    scene.input.press(InputAction::Jump);
    scene.frame();
    assert!(scene.character.locomotion().vertical_velocity() < 0.0);
}

#[test]
fn test_terminal_fall_speed_caps_descent() {
    let config = LocomotionConfig {
        terminal_fall_speed: Some(10.0),
        ..Default::default()
    };
    let world = Arc::new(CollisionWorld::new());
    let mut body = CapsuleBody::new(world.clone(), Vec3::new(0.0, 100.0, 0.0));
    let mut controller = LocomotionController::new(config);

    for _ in 0..240 {
        controller.step(DT, Vec3::ZERO, world.as_ref(), &mut body);
    }
    assert_eq!(controller.vertical_velocity(), -10.0);
}

// ============================================================================
// Walking
// ============================================================================

#[test]
fn test_forward_velocity_approaches_speed_without_overshoot() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();
    scene.input.set_movement(MOVE_FORWARD);

    let mut previous = 0.0f32;
    for _ in 0..600 {
        scene.frame();
        let velocity = scene.character.locomotion().horizontal_velocity();
        let speed = -velocity.z;
        assert!(speed >= previous - 1e-5);
        assert!(speed <= 7.0);
        assert!(velocity.x.abs() < 1e-5);
        previous = speed;
    }
    assert!((previous - 7.0).abs() < 1e-2);
}

#[test]
fn test_release_decays_velocity() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();
    scene.input.set_movement(MOVE_FORWARD);
    for _ in 0..120 {
        scene.frame();
    }
    let moving = scene.character.locomotion().horizontal_velocity().length();

    scene.input.set_movement(Vec3::ZERO);
    scene.frame();
    let after = scene.character.locomotion().horizontal_velocity().length();
    assert!((after - moving * 0.975).abs() < 1e-4);
}

#[test]
fn test_diagonal_input_is_not_faster() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();
    scene.input.set_movement(Vec3::new(1.0, 0.0, -1.0));
    for _ in 0..600 {
        scene.frame();
    }
    let speed = scene.character.locomotion().horizontal_velocity().length();
    assert!((speed - 7.0).abs() < 1e-2);
}

#[test]
fn test_time_constant_smoothing_is_frame_rate_independent() {
    let config = LocomotionConfig {
        smoothing_time_constant: Some(0.2),
        ..Default::default()
    };
    let world = Arc::new(CollisionWorld::with_ground_plane(0.0, 500.0));

    let run = |dt: f32, frames: u32| {
        let mut body = CapsuleBody::new(world.clone(), Vec3::new(0.0, 1.0, 0.0));
        let mut controller = LocomotionController::new(config);
        for _ in 0..frames {
            controller.step(dt, MOVE_FORWARD, world.as_ref(), &mut body);
        }
        controller.horizontal_velocity().length()
    };

    let at_60 = run(1.0 / 60.0, 30);
    let at_30 = run(1.0 / 30.0, 15);
    assert!((at_60 - at_30).abs() < 1e-3);
}

#[test]
fn test_wall_blocks_walking() {
    let mut world = CollisionWorld::with_ground_plane(0.0, 500.0);
    world.add_box(Vec3::new(-5.0, 0.0, -4.0), Vec3::new(5.0, 3.0, -3.0));
    let world = Arc::new(world);
    let mut body = CapsuleBody::new(world.clone(), Vec3::new(0.0, 1.0, 0.0));
    let mut controller = LocomotionController::default();

    let mut hit = false;
    for _ in 0..300 {
        hit |= controller.step(DT, MOVE_FORWARD, world.as_ref(), &mut body).collisions.sides;
    }
    assert!(hit);
    // Capsule radius keeps the center half a meter from the wall face
    assert!((body.position().z - (-2.5)).abs() < 1e-3);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_deactivated_character_ignores_input() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();
    assert!(scene.character.deactivate(&mut scene.input));

    scene.input.set_movement(MOVE_FORWARD);
    scene.input.set_camera_rotation(Vec2::new(100.0, 100.0));
    assert_eq!(scene.input.press(InputAction::Jump), 0);

    let before = scene.body.position();
    let frame = scene
        .character
        .frame(DT, &mut scene.input, &*scene.world, &mut scene.body, &mut scene.rig);
    assert!(frame.is_none());
    assert_eq!(scene.body.position(), before);
    assert!(!scene.input.is_enabled());
}

#[test]
fn test_reactivation_resumes() {
    let mut scene = Scene::on_flat_ground(LocomotionConfig::default());
    scene.settle();
    scene.character.deactivate(&mut scene.input);
    assert!(scene.character.activate(&mut scene.input));
    assert!(scene.frame().grounded);
}
