//! Scripted input sources for driving the engine without a player.

use railshot_core::commands::InputIntents;

/// Produces the intents for each tick.
pub trait InputSource {
    fn sample(&mut self, tick: u64) -> InputIntents;
}

impl<F> InputSource for F
where
    F: FnMut(u64) -> InputIntents,
{
    fn sample(&mut self, tick: u64) -> InputIntents {
        self(tick)
    }
}

/// Sweeps the steering plane and holds fire.
///
/// Horizontal direction flips every `sweep_ticks`; vertical every twice that,
/// so the ship traces a slow zigzag across the bounds.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    sweep_ticks: u64,
}

impl Autopilot {
    pub fn new(sweep_ticks: u64) -> Self {
        Self {
            sweep_ticks: sweep_ticks.max(1),
        }
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, tick: u64) -> InputIntents {
        let horizontal = (tick / self.sweep_ticks) % 2 == 0;
        let vertical = (tick / (self.sweep_ticks * 2)) % 2 == 0;
        InputIntents {
            move_left: !horizontal,
            move_right: horizontal,
            move_up: vertical,
            move_down: !vertical,
            fire: true,
        }
    }
}
