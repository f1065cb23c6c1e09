//! Collision feeds: where projectile contacts come from.
//!
//! The simulation never detects collisions itself during resolution; it
//! drains a [`CollisionFeed`] once per tick and reacts to the contacts it
//! reports. Two feeds are provided: [`ContactQueue`] for contacts pushed from
//! outside (a physics engine, a test), and [`ProximityDetector`] for
//! sphere-overlap contacts computed from [`Hitbox`] components.

use std::sync::mpsc;

use glam::DVec3;
use hecs::{Entity, World};

use railshot_core::components::{EntityMarker, Hitbox, ProjectileState, Transform};
use railshot_core::enums::EntityKind;

/// A reported contact between `a` and `b`. `tag_b` is the category of `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
    pub tag_b: EntityKind,
}

/// Source of contact events, drained once per tick.
pub trait CollisionFeed {
    /// Append this tick's contacts to `out`.
    fn collect(&mut self, world: &World, out: &mut Vec<Contact>);
}

/// Handle used to push contacts into a [`ContactQueue`] from anywhere.
#[derive(Debug, Clone)]
pub struct ContactSender {
    tx: mpsc::Sender<Contact>,
}

/// Feed of externally reported contacts.
#[derive(Debug)]
pub struct ContactQueue {
    rx: mpsc::Receiver<Contact>,
}

impl ContactQueue {
    /// Create a queue and the sender that feeds it.
    pub fn channel() -> (ContactSender, ContactQueue) {
        let (tx, rx) = mpsc::channel();
        (ContactSender { tx }, ContactQueue { rx })
    }
}

impl ContactSender {
    /// Report a contact. Returns `false` if the queue has been dropped.
    pub fn report(&self, contact: Contact) -> bool {
        self.tx.send(contact).is_ok()
    }
}

impl CollisionFeed for ContactQueue {
    fn collect(&mut self, _world: &World, out: &mut Vec<Contact>) {
        out.extend(self.rx.try_iter());
    }
}

/// Reports every projectile whose hitbox overlaps a non-projectile hitbox.
#[derive(Debug, Default)]
pub struct ProximityDetector {
    projectiles: Vec<(Entity, DVec3, f64)>,
    bodies: Vec<(Entity, DVec3, f64, EntityKind)>,
}

impl ProximityDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollisionFeed for ProximityDetector {
    fn collect(&mut self, world: &World, out: &mut Vec<Contact>) {
        self.projectiles.clear();
        self.bodies.clear();

        for (entity, (transform, hitbox, _projectile)) in world
            .query::<(&Transform, &Hitbox, &ProjectileState)>()
            .iter()
        {
            self.projectiles
                .push((entity, transform.position, hitbox.radius));
        }

        for (entity, (transform, hitbox, marker)) in world
            .query::<(&Transform, &Hitbox, &EntityMarker)>()
            .iter()
        {
            if marker.kind != EntityKind::Projectile {
                self.bodies
                    .push((entity, transform.position, hitbox.radius, marker.kind));
            }
        }

        // Naive O(P*B); fields are tens of targets and a handful of shots.
        for &(projectile, p_pos, p_radius) in &self.projectiles {
            for &(body, b_pos, b_radius, kind) in &self.bodies {
                let reach = p_radius + b_radius;
                if p_pos.distance_squared(b_pos) <= reach * reach {
                    out.push(Contact {
                        a: projectile,
                        b: body,
                        tag_b: kind,
                    });
                }
            }
        }
    }
}
