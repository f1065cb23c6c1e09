//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use railshot_core::components::*;
use railshot_core::config::ProjectileConfig;
use railshot_core::enums::{EntityKind, GamePhase};
use railshot_core::events::GameEvent;
use railshot_core::state::*;
use railshot_core::types::SimTime;

use crate::lifecycle::entity_id;
use crate::score::{ScoreTracker, SessionStats};
use crate::systems::reticule;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
    score: &ScoreTracker,
    stats: &SessionStats,
    projectile: &ProjectileConfig,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: build_player(world, projectile),
        projectiles: build_projectiles(world),
        targets: build_targets(world),
        score: ScoreView {
            score: score.count(),
            shots_fired: stats.shots_fired,
            projectiles_expired: stats.projectiles_expired,
            targets_destroyed: stats.targets_destroyed,
            targets_spawned: stats.targets_spawned,
        },
        events,
    }
}

fn build_player(world: &World, projectile: &ProjectileConfig) -> Option<PlayerView> {
    let (position, weapon) = world
        .query::<(&Transform, &Weapon, &EntityMarker)>()
        .iter()
        .find(|(_, (_, _, marker))| marker.kind == EntityKind::Player)
        .map(|(_, (transform, weapon, _))| (transform.position, weapon.state))?;

    Some(PlayerView {
        position,
        weapon,
        aim: reticule::aim(world, position, projectile),
    })
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Transform, &ProjectileState)>()
        .iter()
        .map(|(entity, (transform, projectile))| ProjectileView {
            id: entity_id(entity),
            position: transform.position,
            ttl_ticks: projectile.ttl_ticks,
            spawn_tick: projectile.spawn_tick,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Transform, &EntityMarker)>()
        .iter()
        .filter(|(_, (_, marker))| marker.kind == EntityKind::Target)
        .map(|(entity, (transform, _))| TargetView {
            id: entity_id(entity),
            position: transform.position,
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}
