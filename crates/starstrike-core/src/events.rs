//! Events emitted by the simulation for the scene, audio, and UI collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AiKind, MissionPhase, SceneLayer};
use crate::types::Rgb;

/// Opaque handle identifying a scene node across add/remove calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Scenery owned by a mission phase rather than the entity manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenery {
    /// Large background sphere of the surface approach.
    Landmark,
    /// Corridor, obstacles, and exhaust port of the trench run.
    Trench,
}

/// What the scene collaborator should build for a new node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Visual {
    Enemy { kind: AiKind },
    Projectile,
    Beam { color: Rgb },
    Landmark { center: Vec3, radius: f32 },
    Trench { length: f32, half_width: f32, half_height: f32 },
}

/// Scene-graph mutations requested by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    Added {
        layer: SceneLayer,
        node: NodeId,
        visual: Visual,
    },
    Removed { layer: SceneLayer, node: NodeId },
    SceneryAdded { scenery: Scenery, visual: Visual },
    SceneryRemoved { scenery: Scenery },
}

/// Gameplay events for audio and UI feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Player volley fired.
    VolleyFired { beams: u32 },
    /// An enemy fired a projectile.
    ProjectileShot { position: Vec3 },
    /// An enemy was shot down.
    EnemyDestroyed { position: Vec3 },
    /// A projectile was shot down by a beam.
    ProjectileDestroyed { position: Vec3 },
    /// The player took damage.
    PlayerHit { damage: u32 },
    /// The exhaust port was hit by a volley.
    PortDestroyed,
    PhaseChanged {
        from: MissionPhase,
        to: MissionPhase,
        wave: u32,
    },
    /// Shields reached zero.
    GameOver { score: u64 },
}
