//! Weapon control: cooldown countdown and firing.
//!
//! Ready --fire--> Cooldown{reload_ticks} --countdown reaches 0--> Ready.
//! The countdown runs before the fire check, so a weapon that finishes
//! reloading this tick can fire this tick. Fire intents during cooldown are
//! dropped, not queued.

use glam::{DQuat, DVec3};
use hecs::World;
use tracing::debug;

use railshot_core::components::{Transform, Weapon};
use railshot_core::config::ProjectileConfig;
use railshot_core::enums::WeaponState;
use railshot_core::events::GameEvent;

use crate::world_setup;

/// Run the weapon state machines for one tick. Returns the number of shots fired.
pub fn run(
    world: &mut World,
    fire: bool,
    projectile: &ProjectileConfig,
    dt: f64,
    tick: u64,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let muzzles: Vec<(DVec3, DQuat)> = world
        .query_mut::<(&Transform, &mut Weapon)>()
        .into_iter()
        .filter_map(|(_entity, (transform, weapon))| {
            step(weapon, fire).then_some((transform.position, transform.orientation))
        })
        .collect();

    for &(position, orientation) in &muzzles {
        world_setup::spawn_projectile(world, position, orientation, projectile, dt, tick);
        debug!(tick, x = position.x, y = position.y, z = position.z, "shot fired");
        events.push(GameEvent::ShotFired { tick, position });
    }

    muzzles.len() as u32
}

/// Advance one weapon by a tick. Returns `true` if it fires.
pub fn step(weapon: &mut Weapon, fire: bool) -> bool {
    weapon.state = match weapon.state {
        WeaponState::Cooldown { remaining_ticks } if remaining_ticks > 1 => {
            WeaponState::Cooldown {
                remaining_ticks: remaining_ticks - 1,
            }
        }
        _ => WeaponState::Ready,
    };

    if fire && weapon.state == WeaponState::Ready {
        weapon.state = WeaponState::Cooldown {
            remaining_ticks: weapon.reload_ticks,
        };
        return true;
    }
    false
}
