//! Projectile travel and timeout expiry.
//!
//! Each tick a projectile moves `speed * dt` along its local forward axis and
//! then burns one tick of its time-to-live. A projectile whose ttl reaches
//! zero is destroyed without scoring. Projectiles destroyed earlier in the
//! tick by a collision are simply no longer in the world, so the two
//! termination paths can never both fire.

use glam::DVec3;
use hecs::{Entity, World};
use tracing::trace;

use railshot_core::components::{ProjectileState, Transform};
use railshot_core::events::GameEvent;

use crate::lifecycle::EntityLifecycle;

/// Advance every projectile and destroy the expired ones.
/// Returns the number of projectiles that expired this tick.
pub fn run(
    world: &mut World,
    dt: f64,
    tick: u64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    for (entity, (transform, projectile)) in
        world.query_mut::<(&mut Transform, &mut ProjectileState)>()
    {
        let forward = transform.orientation * DVec3::Z;
        transform.position += forward * projectile.speed * dt;

        if let Some(ttl) = projectile.ttl_ticks.as_mut() {
            *ttl = ttl.saturating_sub(1);
            if *ttl == 0 {
                despawn_buffer.push(entity);
                events.push(GameEvent::ProjectileExpired {
                    tick,
                    position: transform.position,
                });
            }
        }
    }

    let mut expired = 0;
    for entity in despawn_buffer.drain(..) {
        if world.destroy(entity) {
            trace!(tick, ?entity, "projectile expired");
            expired += 1;
        }
    }
    expired
}
