//! Scripted pilot that plays the game well enough to visit every phase.

use glam::{Vec2, Vec3};

use starstrike_core::camera::{Camera, PerspectiveCamera};
use starstrike_core::enums::{FlightMode, MissionPhase};
use starstrike_core::types::PlayerInput;
use starstrike_sim::mission::trench_field::TrenchField;
use starstrike_sim::SimulationEngine;

/// How far ahead (units along -Z) the trench pilot reacts to an obstacle.
const DODGE_LOOKAHEAD: f32 = 40.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Input for the next tick given the engine's current state.
    pub fn input(&self, engine: &SimulationEngine) -> PlayerInput {
        if engine.run_state().is_game_over() {
            return PlayerInput::default();
        }
        let pose = *engine.player().pose();
        let camera = PerspectiveCamera::new(pose, &engine.config().camera);

        match (engine.player().mode(), engine.phase()) {
            (FlightMode::Strafe, _) => match engine.mission().trench_field() {
                Some(field) => {
                    let port = engine.mission().port_target();
                    trench_input(pose.position, field, port, &camera)
                }
                None => PlayerInput::default(),
            },
            (FlightMode::Free, MissionPhase::SurfaceApproach) => PlayerInput::default(),
            (FlightMode::Free, _) => {
                let targets: Vec<Vec3> = engine
                    .entities()
                    .enemies()
                    .iter()
                    .filter(|e| !e.exploded)
                    .map(|e| e.pose.position)
                    .collect();
                dogfight_input(&camera, &targets)
            }
        }
    }
}

/// Aim at the on-screen enemy closest to the crosshair and fire.
pub fn dogfight_input(camera: &dyn Camera, targets: &[Vec3]) -> PlayerInput {
    let forward = camera.forward();
    let best = targets
        .iter()
        .filter(|&&p| (p - camera.position()).dot(forward) > 0.0)
        .filter_map(|&p| camera.project(p))
        .map(|ndc| ndc.truncate())
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));

    match best {
        Some(aim) => PlayerInput::new(aim, true),
        None => PlayerInput::default(),
    }
}

/// Dodge the next obstacle, then line up on the exhaust port.
pub fn trench_input(
    position: Vec3,
    field: &TrenchField,
    port: Option<Vec3>,
    camera: &dyn Camera,
) -> PlayerInput {
    let next = field
        .obstacles()
        .iter()
        .find(|o| o.z < position.z && position.z - o.z <= DODGE_LOOKAHEAD);

    if let Some(obstacle) = next {
        // Low obstacles are cleared high and vice versa.
        let desired_y = if obstacle.y < 0.0 { 6.0 } else { -6.0 };
        let aim = Vec2::new(steer(-position.x), steer(desired_y - position.y));
        return PlayerInput::new(aim, false);
    }

    match port.and_then(|p| camera.project(p)) {
        Some(ndc) => PlayerInput::new(ndc.truncate(), true),
        None => PlayerInput::new(Vec2::new(steer(-position.x), steer(-position.y)), false),
    }
}

fn steer(error: f32) -> f32 {
    (error * 0.5).clamp(-1.0, 1.0)
}
