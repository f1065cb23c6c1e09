//! Simulation engine for RAILSHOT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for display.

pub mod collision;
pub mod display;
pub mod engine;
pub mod lifecycle;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use railshot_core as core;
pub use engine::{BuildError, EngineBuilder, SimulationEngine};
