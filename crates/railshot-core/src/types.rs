//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_BOUND_X, PLAYER_BOUND_Y, TICK_EPSILON};

/// Axis-aligned rectangle in the x/y plane that confines the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Axis-aligned box given by its center and full extent per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub origin: DVec3,
    pub size: DVec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min_x: -PLAYER_BOUND_X,
            max_x: PLAYER_BOUND_X,
            min_y: -PLAYER_BOUND_Y,
            max_y: PLAYER_BOUND_Y,
        }
    }
}

impl Bounds2 {
    pub fn contains_x(&self, x: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x)
    }

    pub fn contains_y(&self, y: f64) -> bool {
        (self.min_y..=self.max_y).contains(&y)
    }
}

impl Region {
    pub fn new(origin: DVec3, size: DVec3) -> Self {
        Self { origin, size }
    }

    /// Lowest corner (`origin - size / 2`).
    pub fn min(&self) -> DVec3 {
        self.origin - self.size * 0.5
    }

    /// Highest corner (`origin + size / 2`).
    pub fn max(&self) -> DVec3 {
        self.origin + self.size * 0.5
    }

    /// Whether a point lies inside the box, faces included.
    pub fn contains(&self, point: DVec3) -> bool {
        let (lo, hi) = (self.min(), self.max());
        point.cmpge(lo).all() && point.cmple(hi).all()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * dt;
    }
}

/// Convert a duration to a whole number of ticks, never less than one.
///
/// Durations that land within floating-point noise of a tick boundary snap to
/// that boundary, so 0.5 s at 0.1 s per tick is exactly 5 ticks.
pub fn secs_to_ticks(secs: f64, dt: f64) -> u64 {
    let ticks = secs / dt;
    let nearest = ticks.round();
    let whole = if (ticks - nearest).abs() < TICK_EPSILON {
        nearest
    } else {
        ticks.ceil()
    };
    (whole as u64).max(1)
}
