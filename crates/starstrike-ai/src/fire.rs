//! Enemy gunnery decision shared by both strategy variants.

use glam::Vec3;

use starstrike_core::constants::EPSILON_SQ;
use starstrike_core::types::Pose;

use crate::rng::RandomSource;
use crate::strategy::StrategyContext;

/// Tick the fire cooldown and decide whether to shoot this tick.
///
/// Returns the unit direction from the enemy to the player when the cooldown
/// has expired, the player is within range, and the enemy sits in front of
/// the player. Firing re-arms the cooldown with a
/// random jitter drawn from `rng`. The cooldown never goes below zero, so an
/// enemy holding fire shoots as soon as the conditions allow.
pub fn decide_fire(
    ctx: &StrategyContext,
    enemy_position: Vec3,
    fire_cooldown: &mut f32,
    rng: &mut dyn RandomSource,
) -> Option<Vec3> {
    let fire = &ctx.tuning.fire;
    *fire_cooldown = (*fire_cooldown - ctx.dt).max(0.0);
    if *fire_cooldown > 0.0 {
        return None;
    }

    let to_player = ctx.player.position - enemy_position;
    let distance_sq = to_player.length_squared();
    if distance_sq <= EPSILON_SQ || distance_sq > fire.range * fire.range {
        return None;
    }
    if !in_front_of(&ctx.player, enemy_position) {
        return None;
    }

    *fire_cooldown = fire.interval + rng.next_unit() * fire.jitter;
    Some(to_player / distance_sq.sqrt())
}

fn in_front_of(player: &Pose, point: Vec3) -> bool {
    player.forward().dot(point - player.position) > 0.0
}
