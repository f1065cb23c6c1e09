//! RAILSHOT headless runner.
//!
//! Wires the simulation engine to a scripted input source, a proximity
//! collision feed and a log-backed score display, and drives it from a
//! dedicated game loop thread.

pub mod display;
pub mod game_loop;
pub mod input;
pub mod settings;
pub mod state;

pub use railshot_core as core;
