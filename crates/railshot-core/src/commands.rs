//! Player input: per-tick intents and session commands.
//!
//! Intents are sampled every tick. Commands are queued and processed at the
//! next tick boundary.

use serde::{Deserialize, Serialize};

/// Boolean intents derived from input, consumed once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntents {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
}

/// Session-level player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Spawn the player and the target field and start ticking.
    StartMission,
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
    /// Clear surviving targets and populate the field again.
    RepopulateTargets,
    /// Tear down the mission and return to the main menu.
    ReturnToMenu,
}

impl InputIntents {
    /// Only the fire intent set.
    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }
}
