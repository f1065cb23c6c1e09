//! Game loop thread: runs the simulation engine at the configured tick rate.
//!
//! The engine is created inside this thread, so its collaborators never cross
//! threads. Commands arrive via `mpsc` channel. Each snapshot is stored in
//! shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use tracing::{debug, info};

use railshot_core::commands::PlayerCommand;
use railshot_core::config::SimConfig;
use railshot_sim::collision::ProximityDetector;
use railshot_sim::SimulationEngine;

use crate::display::LogDisplay;
use crate::input::InputSource;
use crate::state::{GameLoopCommand, LoopOptions, LoopSummary, SharedSnapshot};

/// Running game loop: its command channel and thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<anyhow::Result<LoopSummary>>,
}

impl GameLoopHandle {
    /// Forward a player command. Returns `false` once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.commands.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Ask the loop to stop after the current tick.
    pub fn shutdown(&self) {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
    }

    /// Wait for the loop to exit and return its totals.
    pub fn join(self) -> anyhow::Result<LoopSummary> {
        self.thread
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?
    }
}

/// Nominal duration of one tick.
pub fn tick_duration(config: &SimConfig) -> Duration {
    Duration::from_secs_f64(config.dt())
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    input: impl InputSource + Send + 'static,
    options: LoopOptions,
    latest_snapshot: SharedSnapshot,
) -> anyhow::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("railshot-game-loop".into())
        .spawn(move || run_game_loop(config, input, options, cmd_rx, &latest_snapshot))
        .context("failed to spawn game loop thread")?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until the tick limit, a Shutdown command, or channel
/// disconnect.
fn run_game_loop(
    config: SimConfig,
    mut input: impl InputSource,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> anyhow::Result<LoopSummary> {
    let mut engine = SimulationEngine::builder(config)
        .collision_feed(ProximityDetector::new())
        .display(LogDisplay::default())
        .build()?;
    let tick_duration = tick_duration(engine.config());

    let mut summary = LoopSummary::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(ticks = summary.ticks, "game loop shut down");
                    return Ok(summary);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(summary),
            }
        }

        if options.max_ticks.is_some_and(|max| engine.time().tick >= max) {
            info!(ticks = summary.ticks, "tick limit reached");
            return Ok(summary);
        }

        // 2. Advance one tick with this tick's scripted intents
        let intents = input.sample(engine.time().tick);
        let snapshot = engine.tick(intents);
        summary.record(&snapshot);
        for event in &snapshot.events {
            debug!(?event, "game event");
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        if options.paced {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::DVec3;

    use super::*;
    use railshot_core::commands::InputIntents;
    use railshot_core::enums::GamePhase;

    use crate::input::Autopilot;

    fn unpaced(max_ticks: Option<u64>) -> LoopOptions {
        LoopOptions {
            max_ticks,
            paced: false,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartMission)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_runs_to_tick_limit() {
        let latest = SharedSnapshot::default();
        let handle = spawn_game_loop(
            SimConfig::default(),
            Autopilot::new(30),
            unpaced(Some(120)),
            Arc::clone(&latest),
        )
        .unwrap();
        handle.send(PlayerCommand::StartMission);
        let summary = handle.join().unwrap();

        assert_eq!(summary.ticks, 120);
        assert!(summary.shots_fired > 0);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert!(snapshot.player.is_some());
    }

    #[test]
    fn test_shutdown_stops_unbounded_loop() {
        let handle = spawn_game_loop(
            SimConfig::default(),
            |_tick: u64| InputIntents::default(),
            unpaced(None),
            SharedSnapshot::default(),
        )
        .unwrap();
        handle.send(PlayerCommand::StartMission);
        handle.shutdown();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_invalid_config_fails_loop() {
        let mut config = SimConfig::default();
        config.tick_rate = 0.0;
        let handle = spawn_game_loop(
            config,
            Autopilot::new(30),
            unpaced(Some(10)),
            SharedSnapshot::default(),
        )
        .unwrap();
        assert!(handle.join().is_err());
    }

    #[test]
    fn test_scores_target_dead_ahead() {
        let mut config = SimConfig::default();
        config.target_field.count = 1;
        config.target_field.origin = DVec3::new(0.0, 0.0, 5.0);
        config.target_field.size = DVec3::ZERO;

        let latest = SharedSnapshot::default();
        let handle = spawn_game_loop(
            config,
            |_tick: u64| InputIntents::fire(),
            unpaced(Some(60)),
            Arc::clone(&latest),
        )
        .unwrap();
        handle.send(PlayerCommand::StartMission);
        let summary = handle.join().unwrap();

        assert_eq!(summary.score, 1);
        assert_eq!(summary.targets_destroyed, 1);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.targets.is_empty());
    }

    #[test]
    fn test_tick_duration_follows_tick_rate() {
        let mut config = SimConfig::default();
        config.tick_rate = 50.0;
        assert_eq!(tick_duration(&config), Duration::from_millis(20));
    }
}
