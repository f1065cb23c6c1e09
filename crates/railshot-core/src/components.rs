//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, WeaponState};
use crate::types::Bounds2;

/// Placement of an entity in world space. Local forward is +z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub orientation: DQuat,
}

/// Category tag attached to every spawned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMarker {
    pub kind: EntityKind,
}

/// Lateral steering in the x/y plane (player only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Steering {
    /// Lateral speed (units per second).
    pub slide_rate: f64,
    pub bounds: Bounds2,
}

/// Constant forward advance with loop-back (player only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rail {
    pub speed: f64,
    pub start_point: f64,
    pub reset_distance: f64,
}

/// Cooldown-gated gun mounted on an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub state: WeaponState,
    /// Cooldown length in ticks, at least 1.
    pub reload_ticks: u64,
}

/// In-flight projectile state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileState {
    /// Forward speed (units per second).
    pub speed: f64,
    /// Ticks left before expiry. `None` never expires.
    pub ttl_ticks: Option<u64>,
    /// Tick the projectile was fired on.
    pub spawn_tick: u64,
}

/// Sphere used by proximity collision detection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f64,
}
