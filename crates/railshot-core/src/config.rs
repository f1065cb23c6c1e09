//! Simulation configuration.
//!
//! Every field has a default (see [`constants`](crate::constants)), and
//! sections are `#[serde(default)]`, so a JSON file only needs to name the
//! values it overrides. [`SimConfig::validate`] rejects configurations the
//! simulation cannot run; the engine builder calls it before anything spawns.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::{Bounds2, Region};

/// Configuration for a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per simulated second.
    pub tick_rate: f64,
    pub player: PlayerConfig,
    pub rail: RailConfig,
    pub weapon: WeaponConfig,
    pub projectile: ProjectileConfig,
    pub target_field: TargetFieldConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub slide_rate: f64,
    pub bounds: Bounds2,
    pub start_x: f64,
    pub start_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailConfig {
    pub speed: f64,
    pub start_point: f64,
    pub reset_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Seconds between shots.
    pub reload_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Forward speed. Zero means the projectile hangs in place and never expires.
    pub speed: f64,
    pub range: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetFieldConfig {
    pub origin: DVec3,
    pub size: DVec3,
    pub count: u32,
    pub radius: f64,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("player bounds on {axis} are inverted (min {min}, max {max})")]
    InvertedBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("player start ({x}, {y}) lies outside the flight bounds")]
    StartOutOfBounds { x: f64, y: f64 },

    #[error("rail reset distance {reset_distance} must exceed its start point {start_point}")]
    EmptyRailLoop {
        start_point: f64,
        reset_distance: f64,
    },

    #[error("rail advances {step} per tick, more than its loop length {loop_length}")]
    RailStepTooLong { step: f64, loop_length: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_rate: TICK_RATE,
            player: PlayerConfig::default(),
            rail: RailConfig::default(),
            weapon: WeaponConfig::default(),
            projectile: ProjectileConfig::default(),
            target_field: TargetFieldConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            slide_rate: PLAYER_SLIDE_RATE,
            bounds: Bounds2::default(),
            start_x: 0.0,
            start_y: 0.0,
        }
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            speed: RAIL_SPEED,
            start_point: RAIL_START_POINT,
            reset_distance: RAIL_RESET_DISTANCE,
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            reload_time: WEAPON_RELOAD_TIME,
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            range: PROJECTILE_RANGE,
            radius: PROJECTILE_RADIUS,
        }
    }
}

impl Default for TargetFieldConfig {
    fn default() -> Self {
        Self {
            origin: DVec3::from_array(TARGET_FIELD_ORIGIN),
            size: DVec3::from_array(TARGET_FIELD_SIZE),
            count: TARGET_COUNT,
            radius: TARGET_RADIUS,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate
    }

    /// Check every numeric constraint the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tick_rate", self.tick_rate)?;
        // Subnormal rates pass the sign check but overflow the tick length.
        finite("1 / tick_rate", self.dt())?;
        self.player.validate()?;
        self.rail.validate(self.dt())?;
        positive("weapon.reload_time", self.weapon.reload_time)?;
        self.projectile.validate()?;
        self.target_field.validate()?;
        Ok(())
    }
}

impl PlayerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("player.slide_rate", self.slide_rate)?;

        let b = &self.bounds;
        for (axis, min, max) in [("x", b.min_x, b.max_x), ("y", b.min_y, b.max_y)] {
            finite("player.bounds", min)?;
            finite("player.bounds", max)?;
            if min >= max {
                return Err(ConfigError::InvertedBounds { axis, min, max });
            }
        }

        finite("player.start_x", self.start_x)?;
        finite("player.start_y", self.start_y)?;
        if !b.contains_x(self.start_x) || !b.contains_y(self.start_y) {
            return Err(ConfigError::StartOutOfBounds {
                x: self.start_x,
                y: self.start_y,
            });
        }
        Ok(())
    }
}

impl RailConfig {
    /// Distance subtracted on each loop-back.
    pub fn loop_length(&self) -> f64 {
        self.reset_distance - self.start_point
    }

    fn validate(&self, dt: f64) -> Result<(), ConfigError> {
        non_negative("rail.speed", self.speed)?;
        finite("rail.start_point", self.start_point)?;
        finite("rail.reset_distance", self.reset_distance)?;
        if self.reset_distance <= self.start_point {
            return Err(ConfigError::EmptyRailLoop {
                start_point: self.start_point,
                reset_distance: self.reset_distance,
            });
        }
        let step = self.speed * dt;
        if step > self.loop_length() {
            return Err(ConfigError::RailStepTooLong {
                step,
                loop_length: self.loop_length(),
            });
        }
        Ok(())
    }
}

impl ProjectileConfig {
    /// Lifetime in seconds (`range / speed`), or `None` for a stationary projectile.
    pub fn ttl_secs(&self) -> Option<f64> {
        (self.speed > 0.0).then(|| self.range / self.speed)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("projectile.speed", self.speed)?;
        positive("projectile.range", self.range)?;
        non_negative("projectile.radius", self.radius)?;
        Ok(())
    }
}

impl TargetFieldConfig {
    pub fn region(&self) -> Region {
        Region::new(self.origin, self.size)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for value in self.origin.to_array() {
            finite("target_field.origin", value)?;
        }
        for value in self.size.to_array() {
            non_negative("target_field.size", value)?;
        }
        non_negative("target_field.radius", self.radius)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
