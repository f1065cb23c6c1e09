//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The target field was (re)populated.
    TargetsPopulated { count: u32 },
    /// A projectile left the gun.
    ShotFired { tick: u64, position: DVec3 },
    /// A projectile ran out of range without hitting anything.
    ProjectileExpired { tick: u64, position: DVec3 },
    /// A projectile hit a target; both are gone.
    TargetDestroyed { tick: u64, position: DVec3 },
    /// The score text was pushed to the display sink.
    ScoreChanged { score: u64 },
    /// The rail wrapped back toward its start point.
    RailLooped { tick: u64 },
}
