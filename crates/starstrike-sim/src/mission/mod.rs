//! Mission stage machine: Dogfight → SurfaceApproach → Trench → Dogfight.
//!
//! Each stage owns its scenery and rules. The machine performs at most one
//! transition per update and always cleans up the outgoing stage before the
//! incoming one is entered.

pub mod approach;
pub mod dogfight;
pub mod trench;
pub mod trench_field;

use glam::Vec3;

use starstrike_core::config::{MissionConfig, SimConfig, TrenchConfig};
use starstrike_core::enums::MissionPhase;
use starstrike_core::events::SimEvent;
use starstrike_core::state::RunState;

use crate::entities::EntityManager;
use crate::player::Player;

use approach::ApproachStage;
use dogfight::DogfightStage;
use trench::TrenchStage;
use trench_field::TrenchField;

/// Everything a stage may touch during one update.
pub struct MissionContext<'a> {
    pub dt: f32,
    pub player: &'a mut Player,
    pub entities: &'a mut EntityManager,
    pub run: &'a mut RunState,
    pub events: &'a mut Vec<SimEvent>,
}

/// Result of one stage update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Continue,
    /// Exit conditions met; advance to the next phase.
    Complete,
}

#[derive(Debug, Clone)]
enum Stage {
    Dogfight(DogfightStage),
    SurfaceApproach(ApproachStage),
    Trench(TrenchStage),
}

#[derive(Debug, Clone)]
pub struct MissionMachine {
    mission: MissionConfig,
    trench: TrenchConfig,
    stage: Stage,
}

impl MissionMachine {
    /// Start in Dogfight. Spawning starts enabled on a fresh entity manager.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            mission: config.mission.clone(),
            trench: config.trench.clone(),
            stage: Stage::Dogfight(DogfightStage::new(&config.mission)),
        }
    }

    pub fn phase(&self) -> MissionPhase {
        match self.stage {
            Stage::Dogfight(_) => MissionPhase::Dogfight,
            Stage::SurfaceApproach(_) => MissionPhase::SurfaceApproach,
            Stage::Trench(_) => MissionPhase::Trench,
        }
    }

    /// Run the active stage; returns the new phase if a transition happened.
    pub fn update(&mut self, ctx: &mut MissionContext) -> Option<MissionPhase> {
        let status = match &mut self.stage {
            Stage::Dogfight(stage) => stage.update(ctx),
            Stage::SurfaceApproach(stage) => stage.update(ctx),
            Stage::Trench(stage) => stage.update(ctx),
        };
        if status == StageStatus::Continue {
            return None;
        }

        let from = self.phase();
        self.cleanup(ctx);
        if from == MissionPhase::Trench {
            ctx.run.award(self.mission.trench_bonus);
            ctx.run.complete_wave();
            log::info!(
                "wave complete, now wave {} with score {}",
                ctx.run.wave(),
                ctx.run.score()
            );
        }

        let to = from.next();
        self.enter(to, ctx);
        ctx.events.push(SimEvent::PhaseChanged {
            from,
            to,
            wave: ctx.run.wave(),
        });
        log::info!("mission phase {:?} -> {:?} (wave {})", from, to, ctx.run.wave());
        Some(to)
    }

    /// Tell the trench stage its exhaust port was shot. Ignored in other phases.
    pub fn report_port_hit(&mut self) -> bool {
        match &mut self.stage {
            Stage::Trench(stage) => {
                stage.destroy_port();
                true
            }
            _ => false,
        }
    }

    /// World position of the exhaust port while it can be targeted.
    pub fn port_target(&self) -> Option<Vec3> {
        match &self.stage {
            Stage::Trench(stage) => stage.port_target(),
            _ => None,
        }
    }

    pub fn landmark(&self) -> Option<&ApproachStage> {
        match &self.stage {
            Stage::SurfaceApproach(stage) => Some(stage),
            _ => None,
        }
    }

    pub fn trench_field(&self) -> Option<&TrenchField> {
        match &self.stage {
            Stage::Trench(stage) => Some(stage.field()),
            _ => None,
        }
    }

    /// Tear down the active stage and start again from Dogfight.
    pub fn reset(&mut self, ctx: &mut MissionContext) {
        self.cleanup(ctx);
        self.enter(MissionPhase::Dogfight, ctx);
    }

    fn cleanup(&mut self, ctx: &mut MissionContext) {
        match &mut self.stage {
            Stage::Dogfight(stage) => stage.cleanup(ctx),
            Stage::SurfaceApproach(stage) => stage.cleanup(ctx),
            Stage::Trench(stage) => stage.cleanup(ctx),
        }
    }

    fn enter(&mut self, phase: MissionPhase, ctx: &mut MissionContext) {
        self.stage = match phase {
            MissionPhase::Dogfight => Stage::Dogfight(DogfightStage::enter(&self.mission, ctx)),
            MissionPhase::SurfaceApproach => {
                Stage::SurfaceApproach(ApproachStage::enter(&self.mission, ctx))
            }
            MissionPhase::Trench => Stage::Trench(TrenchStage::enter(&self.trench, ctx)),
        };
        ctx.run.set_phase(phase);
    }
}
