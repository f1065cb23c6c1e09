//! Entity lifecycle: the registry that creates and destroys projectiles,
//! targets and the player.
//!
//! Every entity is addressed by a generational `hecs::Entity` handle, so a
//! handle outlives its entity safely: destroying it twice, or asking about it
//! after destruction, is well defined.

use glam::{DQuat, DVec3};
use hecs::{Entity, World};

use railshot_core::components::{EntityMarker, Transform};
use railshot_core::enums::EntityKind;

/// Create and destroy simulation entities.
pub trait EntityLifecycle {
    /// Create an entity of `kind` at the given placement.
    fn create(&mut self, kind: EntityKind, position: DVec3, orientation: DQuat) -> Entity;

    /// Destroy an entity. Returns `false` if it was already gone.
    fn destroy(&mut self, entity: Entity) -> bool;

    /// Whether the handle still refers to a live entity.
    fn is_alive(&self, entity: Entity) -> bool;
}

impl EntityLifecycle for World {
    fn create(&mut self, kind: EntityKind, position: DVec3, orientation: DQuat) -> Entity {
        self.spawn((
            EntityMarker { kind },
            Transform {
                position,
                orientation,
            },
        ))
    }

    fn destroy(&mut self, entity: Entity) -> bool {
        self.despawn(entity).is_ok()
    }

    fn is_alive(&self, entity: Entity) -> bool {
        self.contains(entity)
    }
}

/// Stable numeric id for snapshots.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}
