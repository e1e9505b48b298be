//! Trench run: a bounded corridor with obstacles and an exhaust port.

use std::collections::HashSet;

use glam::Vec3;

use starstrike_core::config::TrenchConfig;
use starstrike_core::enums::FlightMode;
use starstrike_core::events::{SceneEvent, Scenery, Visual};
use starstrike_core::types::Pose;

use super::trench_field::TrenchField;
use super::{MissionContext, StageStatus};
use crate::combat::apply_player_damage;

/// Why a trench run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrenchExit {
    PortReached,
    PortDestroyed,
    CorridorEnd,
}

#[derive(Debug, Clone)]
pub struct TrenchStage {
    field: TrenchField,
    obstacle_damage: u32,
    /// Obstacles that have already dealt damage.
    struck: HashSet<usize>,
    port_destroyed: bool,
}

impl TrenchStage {
    /// Clear the sky, drop the player at the corridor entrance, and switch
    /// to strafing flight.
    pub fn enter(config: &TrenchConfig, ctx: &mut MissionContext) -> Self {
        ctx.entities.set_spawning_enabled(false);
        ctx.entities.clear();
        ctx.player.set_pose(Pose::default());
        ctx.player.set_mode(FlightMode::Strafe);
        ctx.entities.emit_scene_event(SceneEvent::SceneryAdded {
            scenery: Scenery::Trench,
            visual: Visual::Trench {
                length: config.length,
                half_width: config.half_width,
                half_height: config.half_height,
            },
        });

        Self {
            field: TrenchField::new(config),
            obstacle_damage: config.obstacle_damage,
            struck: HashSet::new(),
            port_destroyed: false,
        }
    }

    pub fn field(&self) -> &TrenchField {
        &self.field
    }

    pub fn destroy_port(&mut self) {
        self.port_destroyed = true;
    }

    pub fn port_target(&self) -> Option<Vec3> {
        if self.port_destroyed {
            None
        } else {
            Some(self.field.port_position())
        }
    }

    pub fn update(&mut self, ctx: &mut MissionContext) -> StageStatus {
        let position = self.field.clamp(ctx.player.pose().position);
        ctx.player.set_position(position);

        if let Some(hit) = self.field.collide(position) {
            if self.struck.insert(hit.index) {
                log::debug!("trench obstacle {} struck", hit.index);
                apply_player_damage(ctx.run, ctx.events, self.obstacle_damage);
            }
        }

        match self.exit(position) {
            Some(exit) => {
                log::info!("trench run over: {:?}", exit);
                StageStatus::Complete
            }
            None => StageStatus::Continue,
        }
    }

    fn exit(&self, position: Vec3) -> Option<TrenchExit> {
        if self.port_destroyed {
            Some(TrenchExit::PortDestroyed)
        } else if self.field.in_port(position) {
            Some(TrenchExit::PortReached)
        } else if self.field.past_end(position) {
            Some(TrenchExit::CorridorEnd)
        } else {
            None
        }
    }

    pub fn cleanup(&mut self, ctx: &mut MissionContext) {
        ctx.entities.emit_scene_event(SceneEvent::SceneryRemoved {
            scenery: Scenery::Trench,
        });
        ctx.player.set_mode(FlightMode::Free);
    }
}
