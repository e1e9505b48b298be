//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level mission phase. Cycles Dogfight → SurfaceApproach → Trench → Dogfight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionPhase {
    #[default]
    Dogfight,
    SurfaceApproach,
    Trench,
}

impl MissionPhase {
    /// The phase that follows this one in the mission cycle.
    pub fn next(self) -> MissionPhase {
        match self {
            MissionPhase::Dogfight => MissionPhase::SurfaceApproach,
            MissionPhase::SurfaceApproach => MissionPhase::Trench,
            MissionPhase::Trench => MissionPhase::Dogfight,
        }
    }
}

/// Which AI strategy variant drives an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiKind {
    /// Holds a fixed lead ahead of the player and sways side to side.
    #[default]
    Reactive,
    /// Approach / shadow / escape script.
    Scripted,
}

/// Scripted AI behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptedPhase {
    /// Closing in on the shadow distance.
    #[default]
    Approach,
    /// Holding station ahead of the player.
    Shadow,
    /// Leaving the engagement. Terminal.
    Escape,
}

/// Escape trajectory family chosen when shadowing ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscapeMode {
    /// Recede into the distance along the player's -Z.
    Far,
    /// Break hard sideways off the screen.
    Quick,
}

/// Player flight mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    /// Aim yaws and pitches the ship.
    #[default]
    Free,
    /// Aim translates the ship along its local X/Y (trench run).
    Strafe,
}

/// Destination scene for a visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneLayer {
    /// 3D world scene (enemies, projectiles, scenery).
    World,
    /// Screen-space overlay (beam weapons).
    Overlay,
}
