//! Simulation engine: the per-tick driver of the whole game.
//!
//! `SimulationEngine` owns the player, the entity manager, combat, the
//! mission stage machine, the run state, and the RNG. Completely headless,
//! which keeps it deterministic for a given seed and input sequence.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::camera::PerspectiveCamera;
use starstrike_core::config::SimConfig;
use starstrike_core::constants::MAX_TICK_SECS;
use starstrike_core::enums::MissionPhase;
use starstrike_core::error::ConfigError;
use starstrike_core::events::{SceneEvent, SimEvent};
use starstrike_core::state::{RunState, SimSnapshot};
use starstrike_core::types::{PlayerInput, SimTime};

use crate::combat::{apply_player_damage, CombatCoordinator};
use crate::entities::EntityManager;
use crate::mission::{MissionContext, MissionMachine};
use crate::player::Player;

pub struct SimulationEngine {
    config: SimConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    player: Player,
    run: RunState,
    entities: EntityManager,
    combat: CombatCoordinator,
    mission: MissionMachine,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Validate `config` and build a fresh run in the Dogfight phase.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("starting simulation with seed {}", config.seed);
        Ok(Self {
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(&config.player),
            run: RunState::new(config.player.shields),
            entities: EntityManager::new(&config),
            combat: CombatCoordinator::new(&config.combat),
            mission: MissionMachine::new(&config),
            events: Vec::new(),
            config,
        })
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// Order: player flight, mission stage, entities, combat.
    pub fn tick(&mut self, dt: f32, input: &PlayerInput) -> SimSnapshot {
        let dt = clamp_dt(dt);
        let input = PlayerInput::new(input.aim, input.firing);
        let game_over = self.run.is_game_over();

        // 1. Player flight
        self.player.update(dt, input.aim, game_over);

        // 2. Mission stage
        let mut ctx = MissionContext {
            dt,
            player: &mut self.player,
            entities: &mut self.entities,
            run: &mut self.run,
            events: &mut self.events,
        };
        self.mission.update(&mut ctx);

        // 3. Entities
        let camera = PerspectiveCamera::new(*self.player.pose(), &self.config.camera);
        let smart_ai = self.run.wave() >= self.config.smart_ai_from_wave;
        let run = &mut self.run;
        let events = &mut self.events;
        let mut on_player_hit = |damage: u32| apply_player_damage(run, events, damage);
        let report = self.entities.update(
            dt,
            self.player.pose(),
            self.player.velocity(),
            smart_ai,
            &camera,
            &mut self.rng,
            Some(&mut on_player_hit),
        );
        for shot in &report.shots {
            self.events.push(SimEvent::ProjectileShot {
                position: shot.position,
            });
        }

        // 4. Combat
        let armed = !self.run.is_game_over();
        let combat = self.combat.update(
            dt,
            &input,
            armed,
            &camera,
            self.mission.port_target(),
            &mut self.entities,
            &mut self.run,
        );
        if combat.beams_fired > 0 {
            self.events.push(SimEvent::VolleyFired {
                beams: combat.beams_fired,
            });
        }
        for &position in &combat.enemies_destroyed {
            self.events.push(SimEvent::EnemyDestroyed { position });
        }
        for &position in &combat.projectiles_destroyed {
            self.events.push(SimEvent::ProjectileDestroyed { position });
        }
        if combat.port_hit && self.mission.report_port_hit() {
            self.events.push(SimEvent::PortDestroyed);
        }

        self.time.advance(dt);
        self.snapshot()
    }

    /// Current visible state without advancing time.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            time: self.time,
            phase: self.mission.phase(),
            wave: self.run.wave(),
            score: self.run.score(),
            shields: self.run.shields(),
            kills: self.run.kills(),
            total_kills: self.run.total_kills(),
            game_over: self.run.is_game_over(),
            player: *self.player.pose(),
            flight_mode: self.player.mode(),
            enemy_count: self.entities.enemy_count(),
            projectile_count: self.entities.projectile_count(),
            beam_count: self.entities.beam_count(),
        }
    }

    /// Start a new run with the same config, continuing the RNG stream.
    pub fn reset(&mut self) {
        let mut ctx = MissionContext {
            dt: 0.0,
            player: &mut self.player,
            entities: &mut self.entities,
            run: &mut self.run,
            events: &mut self.events,
        };
        self.mission.reset(&mut ctx);
        self.entities.clear();
        self.player = Player::new(&self.config.player);
        self.run.reset();
        self.combat.reset();
        self.time = SimTime::default();
        log::info!("run reset");
    }

    /// Scene mutations produced since the last drain, in order.
    pub fn drain_scene_events(&mut self) -> Vec<SceneEvent> {
        self.entities.drain_scene_events()
    }

    /// Gameplay events produced since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> MissionPhase {
        self.mission.phase()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    pub fn mission(&self) -> &MissionMachine {
        &self.mission
    }

    /// Mutable entity access for tests that stage specific encounters.
    #[cfg(test)]
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }
}

fn clamp_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("ignoring invalid tick length {}", dt);
        return 0.0;
    }
    if dt > MAX_TICK_SECS {
        log::warn!("tick length {} clamped to {}", dt, MAX_TICK_SECS);
        return MAX_TICK_SECS;
    }
    dt
}
