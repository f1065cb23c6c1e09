//! Game state snapshot: the complete visible state produced each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, WeaponState};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: Option<PlayerView>,
    pub projectiles: Vec<ProjectileView>,
    pub targets: Vec<TargetView>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// Player ship position, weapon readiness and reticule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub weapon: WeaponState,
    pub aim: AimView,
}

/// Reticule placement for the player's next shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimView {
    /// Near surface of the aimed target, or the end of projectile range.
    pub point: DVec3,
    /// Id of the target the reticule is locked on, if any.
    pub target: Option<u64>,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Stable entity id (hecs entity bits).
    pub id: u64,
    pub position: DVec3,
    pub ttl_ticks: Option<u64>,
    /// Tick the projectile was fired on.
    pub spawn_tick: u64,
}

/// A live target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u64,
    pub position: DVec3,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub shots_fired: u32,
    pub projectiles_expired: u32,
    pub targets_destroyed: u32,
    pub targets_spawned: u32,
}
