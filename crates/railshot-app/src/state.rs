//! State shared between the runner's main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use railshot_core::commands::PlayerCommand;
use railshot_core::state::GameStateSnapshot;

/// Commands sent from the main thread to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// How the game loop is driven.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop once this many simulation ticks have run. Menu and paused ticks
    /// do not count. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the configured tick rate.
    pub paced: bool,
}

/// Totals reported when the game loop exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Simulation ticks run in the current mission.
    pub ticks: u64,
    pub score: u64,
    pub shots_fired: u32,
    pub targets_destroyed: u32,
}

impl LoopSummary {
    /// Fold one tick's snapshot into the totals.
    pub fn record(&mut self, snapshot: &GameStateSnapshot) {
        self.ticks = snapshot.time.tick;
        self.score = snapshot.score.score;
        self.shots_fired = snapshot.score.shots_fired;
        self.targets_destroyed = snapshot.score.targets_destroyed;
    }
}
