//! Enemy AI system: steps each enemy's strategy and collects its shots.
//!
//! Shots are returned to the caller instead of spawned here, so new
//! projectiles join the world only after the projectile pass has run.

use glam::Vec3;
use hecs::{Entity, World};

use starstrike_ai::rng::RandomSource;
use starstrike_ai::{AiStrategy, StrategyContext};
use starstrike_core::components::Enemy;
use starstrike_core::types::Pose;

/// A projectile requested by an enemy this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiredShot {
    pub position: Vec3,
    pub velocity: Vec3,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    roster: &[Entity],
    ctx: &StrategyContext,
    player_velocity: Vec3,
    cleanup_distance: f32,
    rng: &mut dyn RandomSource,
    shots: &mut Vec<FiredShot>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let projectile_speed = ctx.tuning.fire.projectile_speed;
    for &entity in roster {
        let Ok((enemy, pose, strategy)) =
            world.query_one_mut::<(&mut Enemy, &mut Pose, &mut AiStrategy)>(entity)
        else {
            continue;
        };

        // Shot down during the previous combat pass.
        if enemy.exploded {
            despawn_buffer.push(entity);
            continue;
        }

        if let Some(direction) = strategy.update(ctx, pose, &mut enemy.fire_cooldown, rng) {
            shots.push(FiredShot {
                position: pose.position,
                velocity: direction * projectile_speed + player_velocity,
            });
        }

        if pose.range_to(ctx.player.position) > cleanup_distance {
            log::debug!("enemy {:?} left the engagement", entity);
            despawn_buffer.push(entity);
        }
    }
}
