//! Cleanup system: despawns marked entities and compacts their roster.

use hecs::{Entity, World};

use starstrike_core::enums::SceneLayer;
use starstrike_core::events::{NodeId, SceneEvent};

/// Scene handle for an ECS entity.
pub fn node_id(entity: Entity) -> NodeId {
    NodeId(entity.to_bits().get())
}

/// Despawn everything in `despawn_buffer`, announce each removal once, and
/// drop dead handles from `roster` while keeping spawn order.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    despawn_buffer: &mut Vec<Entity>,
    layer: SceneLayer,
    scene_events: &mut Vec<SceneEvent>,
) {
    if despawn_buffer.is_empty() {
        return;
    }
    for entity in despawn_buffer.drain(..) {
        // Already-despawned handles (marked twice in one pass) are skipped.
        if world.despawn(entity).is_ok() {
            scene_events.push(SceneEvent::Removed {
                layer,
                node: node_id(entity),
            });
        }
    }
    roster.retain(|entity| world.contains(*entity));
}
