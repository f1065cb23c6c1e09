//! Reticule: where a shot fired now would first connect.
//!
//! Picks the nearest live target ahead of the ship along +z, within
//! projectile range, whose hitbox overlaps the projectile's path. The aim
//! point sits on that target's near surface, or at full range when nothing
//! qualifies. Read-only, like the snapshot system.

use glam::DVec3;
use hecs::World;

use railshot_core::components::{EntityMarker, Hitbox, Transform};
use railshot_core::config::ProjectileConfig;
use railshot_core::enums::EntityKind;
use railshot_core::state::AimView;

use crate::lifecycle::entity_id;

/// Aim point for a ship at `from` firing `projectile`s.
pub fn aim(world: &World, from: DVec3, projectile: &ProjectileConfig) -> AimView {
    let max_z = from.z + projectile.range;
    // (id, z, radius) of the nearest qualifying target
    let mut nearest: Option<(u64, f64, f64)> = None;

    for (entity, (transform, hitbox, marker)) in world
        .query::<(&Transform, &Hitbox, &EntityMarker)>()
        .iter()
    {
        if marker.kind != EntityKind::Target {
            continue;
        }
        let pos = transform.position;
        if pos.z < from.z || pos.z > max_z {
            continue;
        }
        let reach = projectile.radius + hitbox.radius;
        if pos.truncate().distance_squared(from.truncate()) > reach * reach {
            continue;
        }

        let id = entity_id(entity);
        let closer = match nearest {
            None => true,
            Some((best_id, best_z, _)) => pos.z < best_z || (pos.z == best_z && id < best_id),
        };
        if closer {
            nearest = Some((id, pos.z, hitbox.radius));
        }
    }

    match nearest {
        Some((id, z, radius)) => AimView {
            point: DVec3::new(from.x, from.y, z - radius),
            target: Some(id),
        },
        None => AimView {
            point: DVec3::new(from.x, from.y, max_z),
            target: None,
        },
    }
}
