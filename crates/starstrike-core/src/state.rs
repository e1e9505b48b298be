//! Run state aggregate and the per-tick snapshot handed to presentation.

use serde::{Deserialize, Serialize};

use crate::enums::{FlightMode, MissionPhase};
use crate::types::{Pose, SimTime};

/// Score, shields, and progress counters for one run.
///
/// Owned by the simulation and mutated only through these methods within a
/// tick. Score only grows and shields only shrink until [`RunState::reset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    score: u64,
    shields: u32,
    initial_shields: u32,
    /// Kills in the current wave; drives the dogfight exit.
    kills: u32,
    total_kills: u32,
    /// 1-based wave counter.
    wave: u32,
    phase: MissionPhase,
    game_over: bool,
}

impl RunState {
    pub fn new(shields: u32) -> Self {
        Self {
            score: 0,
            shields,
            initial_shields: shields,
            kills: 0,
            total_kills: 0,
            wave: 1,
            phase: MissionPhase::default(),
            game_over: shields == 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn shields(&self) -> u32 {
        self.shields
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn total_kills(&self) -> u32 {
        self.total_kills
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Add points to the score.
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove shields, clamping at zero. Returns true if this hit ended the run.
    pub fn damage(&mut self, amount: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.shields = self.shields.saturating_sub(amount);
        if self.shields == 0 {
            self.game_over = true;
            return true;
        }
        false
    }

    pub fn record_kill(&mut self) {
        self.kills += 1;
        self.total_kills += 1;
    }

    pub fn set_phase(&mut self, phase: MissionPhase) {
        self.phase = phase;
    }

    /// Close out a full mission cycle: next wave, per-wave kills reset.
    pub fn complete_wave(&mut self) {
        self.wave += 1;
        self.kills = 0;
    }

    /// Start a fresh run with full shields.
    pub fn reset(&mut self) {
        *self = RunState::new(self.initial_shields);
    }
}

/// Complete visible state returned after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: MissionPhase,
    pub wave: u32,
    pub score: u64,
    pub shields: u32,
    pub kills: u32,
    pub total_kills: u32,
    pub game_over: bool,
    pub player: Pose,
    pub flight_mode: FlightMode,
    pub enemy_count: usize,
    pub projectile_count: usize,
    pub beam_count: usize,
}
