//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing. Its collaborators (collision feed and
//! score display) are injected through [`EngineBuilder`].

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use railshot_core::commands::{InputIntents, PlayerCommand};
use railshot_core::config::{ConfigError, SimConfig};
use railshot_core::enums::GamePhase;
use railshot_core::events::GameEvent;
use railshot_core::state::GameStateSnapshot;
use railshot_core::types::SimTime;

use crate::collision::{CollisionFeed, Contact};
use crate::display::ScoreDisplay;
use crate::score::{ScoreTracker, SessionStats};
use crate::systems;
use crate::world_setup;

/// Errors raised while assembling an engine.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

/// Assembles a [`SimulationEngine`] from a config and its collaborators.
pub struct EngineBuilder {
    config: SimConfig,
    collisions: Option<Box<dyn CollisionFeed>>,
    display: Option<Box<dyn ScoreDisplay>>,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    dt: f64,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Option<Entity>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    contact_buffer: Vec<Contact>,
    events: Vec<GameEvent>,
    score: ScoreTracker,
    stats: SessionStats,
    collisions: Box<dyn CollisionFeed>,
    display: Box<dyn ScoreDisplay>,
}

impl EngineBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            collisions: None,
            display: None,
        }
    }

    /// Source of projectile contacts, drained once per tick.
    pub fn collision_feed(mut self, feed: impl CollisionFeed + 'static) -> Self {
        self.collisions = Some(Box::new(feed));
        self
    }

    /// Sink that receives the score text when it changes.
    pub fn display(mut self, display: impl ScoreDisplay + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Validate the config and check every collaborator is present.
    pub fn build(self) -> Result<SimulationEngine, BuildError> {
        self.config.validate()?;
        let collisions = self
            .collisions
            .ok_or(BuildError::MissingCollaborator("collision feed"))?;
        let display = self
            .display
            .ok_or(BuildError::MissingCollaborator("score display"))?;

        Ok(SimulationEngine {
            world: World::new(),
            dt: self.config.dt(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(self.config.seed),
            player: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            contact_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreTracker::new(),
            stats: SessionStats::default(),
            collisions,
            display,
            config: self.config,
        })
    }
}

impl SimulationEngine {
    /// Start assembling an engine for `config`.
    pub fn builder(config: SimConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, intents: InputIntents) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(&intents);
            self.time.advance(self.dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            events,
            &self.score,
            &self.stats,
            &self.config.projectile,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity, once a mission has started.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// Mutable access to the world (for tests that stage scenarios).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::MainMenu {
                    self.start_mission();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    info!(tick = self.time.tick, "paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    info!(tick = self.time.tick, "resumed");
                }
            }
            PlayerCommand::RepopulateTargets => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    let removed = systems::target_field::clear(&mut self.world);
                    debug!(removed, "cleared surviving targets");
                    self.populate_targets();
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.world.clear();
                    self.player = None;
                    self.phase = GamePhase::MainMenu;
                    info!(score = self.score.count(), "mission ended");
                }
            }
        }
    }

    fn start_mission(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.score.reset();
        self.stats = SessionStats::default();
        self.player = Some(world_setup::spawn_player(&mut self.world, &self.config));
        self.populate_targets();
        self.phase = GamePhase::Active;
        info!(seed = self.config.seed, "mission started");
    }

    fn populate_targets(&mut self) {
        let spawned = systems::target_field::populate(
            &mut self.world,
            &mut self.rng,
            &self.config.target_field,
        )
        .len() as u32;
        self.stats.targets_spawned += spawned;
        self.events.push(GameEvent::TargetsPopulated { count: spawned });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, intents: &InputIntents) {
        let tick = self.time.tick;

        // 1. Player motion in the x/y plane
        systems::motion::run(&mut self.world, intents, self.dt);
        // 2. Rail advance along z
        systems::rail::run(&mut self.world, self.dt, tick, &mut self.events);
        // 3. Projectile travel and timeout
        self.stats.projectiles_expired += systems::projectile::run(
            &mut self.world,
            self.dt,
            tick,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Collision contacts
        self.contact_buffer.clear();
        self.collisions.collect(&self.world, &mut self.contact_buffer);
        self.stats.targets_destroyed += systems::impact::run(
            &mut self.world,
            &self.contact_buffer,
            &mut self.score,
            tick,
            &mut self.events,
        );
        // 5. Weapon cooldown and fire
        self.stats.shots_fired += systems::weapon::run(
            &mut self.world,
            intents.fire,
            &self.config.projectile,
            self.dt,
            tick,
            &mut self.events,
        );
        // 6. Score display refresh
        if let Some(score) = self.score.flush(&mut *self.display) {
            self.events.push(GameEvent::ScoreChanged { score });
        }
    }
}
