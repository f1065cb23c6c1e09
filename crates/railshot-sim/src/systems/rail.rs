//! Rail advance: constant forward motion along +z with loop-back.

use hecs::World;
use tracing::debug;

use railshot_core::components::{Rail, Transform};
use railshot_core::events::GameEvent;

/// Advance every railed entity by one tick. Emits `RailLooped` on each wrap.
pub fn run(world: &mut World, dt: f64, tick: u64, events: &mut Vec<GameEvent>) {
    for (_entity, (transform, rail)) in world.query_mut::<(&mut Transform, &Rail)>() {
        let (z, looped) = advance(transform.position.z, rail, dt);
        transform.position.z = z;
        if looped {
            debug!(tick, z, "rail looped");
            events.push(GameEvent::RailLooped { tick });
        }
    }
}

/// Forward coordinate after one tick, and whether it wrapped.
///
/// Reaching `reset_distance` subtracts the loop length once, so the excess
/// travel carries over past `start_point`.
pub fn advance(z: f64, rail: &Rail, dt: f64) -> (f64, bool) {
    let z = z + rail.speed * dt;
    if z >= rail.reset_distance {
        (z - (rail.reset_distance - rail.start_point), true)
    } else {
        (z, false)
    }
}
