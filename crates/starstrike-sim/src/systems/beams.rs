//! Beam system: advances screen-space beams at constant speed.

use hecs::{Entity, World};

use starstrike_core::components::BeamWeapon;

/// Advance every beam; beams that reach the target depth hit progress 1.0
/// and are marked for removal in the same pass.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    dt: f32,
    target_depth: f32,
    speed: f32,
    despawn_buffer: &mut Vec<Entity>,
) {
    for &entity in roster {
        let Ok(beam) = world.query_one_mut::<&mut BeamWeapon>(entity) else {
            continue;
        };
        beam.elapsed_secs += dt;
        let travelled = beam.elapsed_secs * speed;
        if travelled >= target_depth {
            beam.progress = 1.0;
            despawn_buffer.push(entity);
        } else {
            beam.progress = (travelled / target_depth).min(1.0);
        }
    }
}
