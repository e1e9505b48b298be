//! Projectile system: integration, swept player collision, and expiry.

use hecs::{Entity, World};

use starstrike_core::camera::Camera;
use starstrike_core::components::Projectile;
use starstrike_core::config::EntityConfig;
use starstrike_core::types::Pose;

/// Advance all projectiles and test live ones against the player.
///
/// Calls `on_player_hit` once per projectile that hits and returns the number
/// of hits this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    roster: &[Entity],
    dt: f32,
    player: &Pose,
    camera: &dyn Camera,
    config: &EntityConfig,
    on_player_hit: &mut dyn FnMut(u32),
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    let mut hits = 0;
    for &entity in roster {
        let Ok(projectile) = world.query_one_mut::<&mut Projectile>(entity) else {
            continue;
        };

        let burnt_out = if projectile.exploded {
            projectile.explosion_timer += dt;
            projectile.explosion_timer >= config.projectile_explosion_duration
        } else {
            projectile.previous_position = projectile.position;
            projectile.position += projectile.velocity * dt;

            if hits_player(projectile, player, camera, config) {
                projectile.exploded = true;
                projectile.explosion_timer = 0.0;
                hits += 1;
                log::debug!("projectile {:?} hit the player", entity);
                on_player_hit(config.projectile_damage);
            }
            false
        };

        let out_of_range =
            projectile.position.distance(player.position) > config.projectile_expiration_distance;
        if burnt_out || out_of_range {
            despawn_buffer.push(entity);
        }
    }
    hits
}

/// Swept test against the plane `projectile_hit_distance` ahead of the
/// camera, then a plain body-radius test.
///
/// The sweep catches projectiles that cross the plane in a single step no
/// matter how fast they move. The crossing only counts if the projectile was
/// on screen, within the tolerance box, at the start of the step.
pub fn hits_player(
    projectile: &Projectile,
    player: &Pose,
    camera: &dyn Camera,
    config: &EntityConfig,
) -> bool {
    let eye = camera.position();
    let forward = camera.forward();
    let threshold = config.projectile_hit_distance;
    let current = (projectile.position - eye).dot(forward);
    let previous = (projectile.previous_position - eye).dot(forward);

    if previous > threshold && current <= threshold {
        if let Some(ndc) = camera.project(projectile.previous_position) {
            let tolerance = config.projectile_screen_tolerance;
            if ndc.x.abs() <= tolerance && ndc.y.abs() <= tolerance {
                return true;
            }
        }
    }

    projectile.position.distance(player.position) < config.projectile_body_radius
}
