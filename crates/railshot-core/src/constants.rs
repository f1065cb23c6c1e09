//! Simulation constants and default tuning parameters.
//!
//! Defaults reproduce the prototype's hand-tuned values. Everything here
//! except `TICK_EPSILON` and `SCORE_TEXT_PREFIX` can be overridden through
//! [`SimConfig`](crate::config::SimConfig).

/// Default simulation tick rate (Hz).
pub const TICK_RATE: f64 = 60.0;

/// Tolerance used when snapping durations onto tick boundaries.
pub const TICK_EPSILON: f64 = 1e-6;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Player ---

/// Half-width of the player's flight rectangle.
pub const PLAYER_BOUND_X: f64 = 4.0;

/// Half-height of the player's flight rectangle.
pub const PLAYER_BOUND_Y: f64 = 3.0;

/// Lateral speed in the x/y plane (units per second).
pub const PLAYER_SLIDE_RATE: f64 = 5.0;

// --- Rail ---

/// Forward speed along +z (units per second).
pub const RAIL_SPEED: f64 = 1.0;

/// Forward coordinate the rail starts from and loops back toward.
pub const RAIL_START_POINT: f64 = 0.0;

/// Forward coordinate at which the rail loops back.
pub const RAIL_RESET_DISTANCE: f64 = 150.0;

// --- Weapon ---

/// Minimum time between shots (seconds).
pub const WEAPON_RELOAD_TIME: f64 = 0.5;

// --- Projectile ---

/// Projectile forward speed (units per second).
pub const PROJECTILE_SPEED: f64 = 30.0;

/// Distance a projectile travels before it expires.
pub const PROJECTILE_RANGE: f64 = 50.0;

/// Collision radius of a projectile.
pub const PROJECTILE_RADIUS: f64 = 0.1;

// --- Target field ---

/// Number of targets spawned per population pass.
pub const TARGET_COUNT: u32 = 30;

/// Center of the default target field.
pub const TARGET_FIELD_ORIGIN: [f64; 3] = [0.0, 0.0, 75.0];

/// Full extent of the default target field.
pub const TARGET_FIELD_SIZE: [f64; 3] = [8.0, 6.0, 150.0];

/// Collision radius of a target.
pub const TARGET_RADIUS: f64 = 0.5;

// --- Display ---

/// Prefix of the score text pushed to display sinks.
pub const SCORE_TEXT_PREFIX: &str = "Score: ";
