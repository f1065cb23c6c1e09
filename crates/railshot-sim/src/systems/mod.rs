//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or in
//! the engine.

pub mod impact;
pub mod motion;
pub mod projectile;
pub mod rail;
pub mod reticule;
pub mod snapshot;
pub mod target_field;
pub mod weapon;
