//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, projectiles and targets through [`EntityLifecycle`]
//! and attaches the component bundles each kind needs.

use glam::{DQuat, DVec3};
use hecs::{Entity, World};

use railshot_core::components::*;
use railshot_core::config::{ProjectileConfig, SimConfig};
use railshot_core::enums::{EntityKind, WeaponState};
use railshot_core::types::secs_to_ticks;

use crate::lifecycle::EntityLifecycle;

/// Spawn the player ship at its configured start, on the rail's start point.
pub fn spawn_player(world: &mut World, config: &SimConfig) -> Entity {
    let position = DVec3::new(
        config.player.start_x,
        config.player.start_y,
        config.rail.start_point,
    );
    let player = world.create(EntityKind::Player, position, DQuat::IDENTITY);

    let steering = Steering {
        slide_rate: config.player.slide_rate,
        bounds: config.player.bounds,
    };
    let rail = Rail {
        speed: config.rail.speed,
        start_point: config.rail.start_point,
        reset_distance: config.rail.reset_distance,
    };
    let weapon = Weapon {
        state: WeaponState::Ready,
        reload_ticks: secs_to_ticks(config.weapon.reload_time, config.dt()),
    };

    // Freshly created above, so the insert cannot miss.
    let _ = world.insert(player, (steering, rail, weapon));
    player
}

/// Spawn a projectile at a muzzle, flying along the muzzle's forward axis.
pub fn spawn_projectile(
    world: &mut World,
    position: DVec3,
    orientation: DQuat,
    config: &ProjectileConfig,
    dt: f64,
    tick: u64,
) -> Entity {
    let projectile = world.create(EntityKind::Projectile, position, orientation);
    let state = ProjectileState {
        speed: config.speed,
        ttl_ticks: config.ttl_secs().map(|secs| secs_to_ticks(secs, dt)),
        spawn_tick: tick,
    };
    let _ = world.insert(
        projectile,
        (
            state,
            Hitbox {
                radius: config.radius,
            },
        ),
    );
    projectile
}

/// Spawn a target with the fixed identity orientation.
pub fn spawn_target(world: &mut World, position: DVec3, radius: f64) -> Entity {
    let target = world.create(EntityKind::Target, position, DQuat::IDENTITY);
    let _ = world.insert_one(target, Hitbox { radius });
    target
}
