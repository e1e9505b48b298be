//! Dogfight: open space combat until enough kills are scored.

use starstrike_core::config::MissionConfig;
use starstrike_core::enums::FlightMode;

use super::{MissionContext, StageStatus};

#[derive(Debug, Clone)]
pub struct DogfightStage {
    kill_threshold: u32,
}

impl DogfightStage {
    pub fn new(config: &MissionConfig) -> Self {
        Self {
            kill_threshold: config.kill_threshold,
        }
    }

    pub fn enter(config: &MissionConfig, ctx: &mut MissionContext) -> Self {
        ctx.entities.set_spawning_enabled(true);
        ctx.player.set_mode(FlightMode::Free);
        Self::new(config)
    }

    pub fn update(&mut self, ctx: &mut MissionContext) -> StageStatus {
        if ctx.run.kills() >= self.kill_threshold {
            StageStatus::Complete
        } else {
            StageStatus::Continue
        }
    }

    pub fn cleanup(&mut self, ctx: &mut MissionContext) {
        ctx.entities.set_spawning_enabled(false);
    }
}
