//! Game loop thread: runs the simulation engine at a fixed 60Hz step.
//!
//! The engine is moved into the thread. Commands arrive over an `mpsc`
//! channel; the latest snapshot is stored in shared state for polling, and
//! the thread returns a [`RunReport`] when it stops.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;

use starstrike_core::events::SimEvent;
use starstrike_core::state::SimSnapshot;
use starstrike_core::types::PlayerInput;
use starstrike_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::state::GameLoopCommand;

/// Simulation steps per second.
pub const TICK_RATE: u32 = 60;

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Simulated seconds per tick.
pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Stop after this many ticks; `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Pace ticks to wall-clock time instead of running flat out.
    pub realtime: bool,
    /// Start with the autopilot flying.
    pub autopilot: bool,
}

/// Tallies of what happened during a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub ticks: u64,
    pub volleys: u32,
    pub enemies_destroyed: u32,
    pub projectiles_destroyed: u32,
    pub enemy_shots: u32,
    pub player_hits: u32,
    pub phase_changes: u32,
    pub ports_destroyed: u32,
    pub scene_events: u64,
    pub final_snapshot: Option<SimSnapshot>,
}

impl RunReport {
    fn record(&mut self, event: &SimEvent) {
        match event {
            SimEvent::VolleyFired { .. } => self.volleys += 1,
            SimEvent::ProjectileShot { .. } => self.enemy_shots += 1,
            SimEvent::EnemyDestroyed { .. } => self.enemies_destroyed += 1,
            SimEvent::ProjectileDestroyed { .. } => self.projectiles_destroyed += 1,
            SimEvent::PlayerHit { .. } => self.player_hits += 1,
            SimEvent::PortDestroyed => self.ports_destroyed += 1,
            SimEvent::PhaseChanged { .. } => self.phase_changes += 1,
            SimEvent::GameOver { score } => log::info!("game over, final score {}", score),
        }
    }
}

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the handle that yields the run report.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunReport>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starstrike-game-loop".into())
        .spawn(move || run_game_loop(engine, settings, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the tick limit, a Shutdown command, or channel
/// disconnect.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> RunReport {
    let autopilot = Autopilot::new();
    let mut autopilot_enabled = settings.autopilot;
    let mut manual_input = PlayerInput::default();
    let mut report = RunReport::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::SetInput(input)) => {
                    manual_input = input;
                    autopilot_enabled = false;
                }
                Ok(GameLoopCommand::SetAutopilot(enabled)) => autopilot_enabled = enabled,
                Ok(GameLoopCommand::Reset) => engine.reset(),
                Ok(GameLoopCommand::Shutdown) => return finish(report, &engine),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return finish(report, &engine),
            }
        }

        // 2. Advance one tick
        let input = if autopilot_enabled {
            autopilot.input(&engine)
        } else {
            manual_input
        };
        let snapshot = engine.tick(TICK_DT, &input);
        report.ticks += 1;

        // 3. Tally events; scene mutations have no renderer to go to
        for event in engine.drain_events() {
            report.record(&event);
        }
        report.scene_events += engine.drain_scene_events().len() as u64;

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if settings.max_ticks.is_some_and(|max| report.ticks >= max) {
            return finish(report, &engine);
        }

        // 5. Sleep until next tick
        if settings.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

fn finish(mut report: RunReport, engine: &SimulationEngine) -> RunReport {
    report.final_snapshot = Some(engine.snapshot());
    report
}
