//! Target field population: one-shot batch spawning of targets.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use railshot_core::components::EntityMarker;
use railshot_core::config::TargetFieldConfig;
use railshot_core::enums::EntityKind;
use railshot_core::types::Region;

use crate::lifecycle::EntityLifecycle;
use crate::world_setup;

/// Spawn `config.count` targets uniformly inside the configured box.
pub fn populate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &TargetFieldConfig,
) -> Vec<Entity> {
    let region = config.region();
    let targets: Vec<Entity> = (0..config.count)
        .map(|_| {
            let position = sample_point(rng, &region);
            world_setup::spawn_target(world, position, config.radius)
        })
        .collect();

    info!(
        count = targets.len(),
        origin = %config.origin,
        size = %config.size,
        "target field populated"
    );
    targets
}

/// Destroy every live target. Returns how many were removed.
pub fn clear(world: &mut World) -> u32 {
    let targets: Vec<Entity> = world
        .query::<&EntityMarker>()
        .iter()
        .filter(|(_, marker)| marker.kind == EntityKind::Target)
        .map(|(entity, _)| entity)
        .collect();

    targets
        .into_iter()
        .filter(|&entity| world.destroy(entity))
        .count() as u32
}

/// Each coordinate independently uniform in `[min, max]` of the region.
pub fn sample_point(rng: &mut ChaCha8Rng, region: &Region) -> DVec3 {
    let (lo, hi) = (region.min(), region.max());
    DVec3::new(
        rng.gen_range(lo.x..=hi.x),
        rng.gen_range(lo.y..=hi.y),
        rng.gen_range(lo.z..=hi.z),
    )
}
