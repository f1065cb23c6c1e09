use std::sync::Arc;

use anyhow::anyhow;
use tracing::info;
use tracing_subscriber::EnvFilter;

use railshot_app::game_loop::spawn_game_loop;
use railshot_app::input::Autopilot;
use railshot_app::settings;
use railshot_app::state::{LoopOptions, SharedSnapshot};
use railshot_core::commands::PlayerCommand;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("RAILSHOT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = settings::load_config(settings::config_path().as_deref())?;
    let options = LoopOptions {
        max_ticks: Some(settings::tick_limit()),
        paced: settings::paced(),
    };
    info!(
        seed = config.seed,
        tick_rate = config.tick_rate,
        ticks = ?options.max_ticks,
        paced = options.paced,
        "starting railshot"
    );

    let latest = SharedSnapshot::default();
    let handle = spawn_game_loop(
        config,
        Autopilot::new(settings::AUTOPILOT_SWEEP_TICKS),
        options,
        Arc::clone(&latest),
    )?;
    handle.send(PlayerCommand::StartMission);
    let summary = handle.join()?;

    info!(
        ticks = summary.ticks,
        score = summary.score,
        shots = summary.shots_fired,
        destroyed = summary.targets_destroyed,
        "run finished"
    );

    let snapshot = latest
        .lock()
        .map_err(|_| anyhow!("snapshot lock poisoned"))?
        .take();
    if let Some(snapshot) = snapshot {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
