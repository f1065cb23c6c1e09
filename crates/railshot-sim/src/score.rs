//! Score tracking: the point counter and its display refresh.
//!
//! Stored in `SimulationEngine`, NOT as an ECS entity.

use railshot_core::constants::SCORE_TEXT_PREFIX;

use crate::display::ScoreDisplay;

/// Point counter with a dirty flag for display sinks.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    count: u64,
    changed: bool,
}

/// Counters reported in snapshots alongside the score.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub shots_fired: u32,
    pub projectiles_expired: u32,
    pub targets_destroyed: u32,
    pub targets_spawned: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add exactly one point.
    pub fn score_point(&mut self) {
        self.count += 1;
        self.changed = true;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Back to zero for a new session. Flags a change only if the count moved.
    pub fn reset(&mut self) {
        self.changed |= self.count != 0;
        self.count = 0;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Push the score text to `display` if it changed since the last flush.
    /// Returns the score that was pushed.
    pub fn flush(&mut self, display: &mut dyn ScoreDisplay) -> Option<u64> {
        if !self.changed {
            return None;
        }
        display.set_score_text(&score_text(self.count));
        self.changed = false;
        Some(self.count)
    }
}

/// Display text for a score, e.g. `"Score: 3"`.
pub fn score_text(count: u64) -> String {
    format!("{SCORE_TEXT_PREFIX}{count}")
}
