//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mission loaded; ticks do nothing.
    #[default]
    MainMenu,
    /// Mission running.
    Active,
    /// Mission loaded but frozen.
    Paused,
}

/// What an entity is. Doubles as the category tag reported by collision feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Target,
}

/// Weapon readiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum WeaponState {
    /// The next fire intent spawns a projectile.
    #[default]
    Ready,
    /// Reloading; fire intents are dropped.
    Cooldown { remaining_ticks: u64 },
}
