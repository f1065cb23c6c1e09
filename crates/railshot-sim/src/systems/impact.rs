//! Impact resolution: reacts to the tick's collision contacts.
//!
//! A contact scores only when `a` is a live projectile and `b` is a live
//! entity tagged `Target`, both in the contact and in the world. A scoring
//! contact adds one point and destroys both entities before the next contact
//! is examined, so later contacts naming either of them fall through the
//! liveness checks.

use hecs::World;
use tracing::debug;

use railshot_core::components::{EntityMarker, ProjectileState, Transform};
use railshot_core::enums::EntityKind;
use railshot_core::events::GameEvent;

use crate::collision::Contact;
use crate::lifecycle::EntityLifecycle;
use crate::score::ScoreTracker;

/// Resolve contacts in order. Returns the number of targets destroyed.
pub fn run(
    world: &mut World,
    contacts: &[Contact],
    score: &mut ScoreTracker,
    tick: u64,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut destroyed = 0;

    for contact in contacts {
        if contact.tag_b != EntityKind::Target {
            continue;
        }
        // Expired or already-spent projectiles are gone from the world.
        if world.get::<&ProjectileState>(contact.a).is_err() {
            continue;
        }
        // The feed's tag must agree with what `b` actually is.
        let b_is_target = world
            .get::<&EntityMarker>(contact.b)
            .is_ok_and(|marker| marker.kind == EntityKind::Target);
        if !b_is_target {
            continue;
        }

        let position = world
            .get::<&Transform>(contact.b)
            .map(|t| t.position)
            .unwrap_or_default();

        score.score_point();
        world.destroy(contact.b);
        world.destroy(contact.a);
        destroyed += 1;

        debug!(tick, score = score.count(), "target destroyed");
        events.push(GameEvent::TargetDestroyed { tick, position });
    }

    destroyed
}

#[cfg(test)]
mod tests {
    use glam::{DQuat, DVec3};
    use hecs::Entity;
    use railshot_core::config::ProjectileConfig;

    use super::*;
    use crate::world_setup::{spawn_projectile, spawn_target};

    fn shot(world: &mut World) -> Entity {
        spawn_projectile(
            world,
            DVec3::ZERO,
            DQuat::IDENTITY,
            &ProjectileConfig::default(),
            0.1,
            0,
        )
    }

    fn hit(a: Entity, b: Entity) -> Contact {
        Contact {
            a,
            b,
            tag_b: EntityKind::Target,
        }
    }

    #[test]
    fn test_hit_scores_once_and_destroys_both() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p = shot(&mut world);
        let t = spawn_target(&mut world, DVec3::new(0.0, 0.0, 5.0), 0.5);

        let destroyed = run(&mut world, &[hit(p, t)], &mut score, 3, &mut events);

        assert_eq!(destroyed, 1);
        assert_eq!(score.count(), 1);
        assert!(!world.is_alive(p));
        assert!(!world.is_alive(t));
        assert_eq!(
            events,
            vec![GameEvent::TargetDestroyed {
                tick: 3,
                position: DVec3::new(0.0, 0.0, 5.0),
            }]
        );
    }

    #[test]
    fn test_mislabeled_player_contact_is_ignored() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p = shot(&mut world);
        let player = world.create(EntityKind::Player, DVec3::ZERO, DQuat::IDENTITY);

        let destroyed = run(&mut world, &[hit(p, player)], &mut score, 0, &mut events);

        assert_eq!(destroyed, 0);
        assert_eq!(score.count(), 0);
        assert!(world.is_alive(player), "player must survive a contact tagged Target");
        assert!(world.is_alive(p));
        assert!(events.is_empty());
    }

    #[test]
    fn test_duplicate_contact_is_ignored() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p = shot(&mut world);
        let t = spawn_target(&mut world, DVec3::ZERO, 0.5);

        run(&mut world, &[hit(p, t), hit(p, t)], &mut score, 0, &mut events);
        assert_eq!(score.count(), 1);
    }

    #[test]
    fn test_projectile_hits_only_first_target() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p = shot(&mut world);
        let t1 = spawn_target(&mut world, DVec3::ZERO, 0.5);
        let t2 = spawn_target(&mut world, DVec3::ZERO, 0.5);

        run(&mut world, &[hit(p, t1), hit(p, t2)], &mut score, 0, &mut events);
        assert_eq!(score.count(), 1);
        assert!(!world.is_alive(t1));
        assert!(world.is_alive(t2), "spent projectile must not destroy a second target");
    }

    #[test]
    fn test_target_destroyed_at_most_once() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p1 = shot(&mut world);
        let p2 = shot(&mut world);
        let t = spawn_target(&mut world, DVec3::ZERO, 0.5);

        run(&mut world, &[hit(p1, t), hit(p2, t)], &mut score, 0, &mut events);
        assert_eq!(score.count(), 1);
        assert!(world.is_alive(p2), "second projectile keeps flying");
    }

    #[test]
    fn test_non_target_tag_has_no_effect() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p = shot(&mut world);
        let t = spawn_target(&mut world, DVec3::ZERO, 0.5);

        let contact = Contact {
            a: p,
            b: t,
            tag_b: EntityKind::Player,
        };
        assert_eq!(run(&mut world, &[contact], &mut score, 0, &mut events), 0);
        assert_eq!(score.count(), 0);
        assert!(world.is_alive(p) && world.is_alive(t));
        assert!(events.is_empty());
    }

    #[test]
    fn test_non_projectile_source_has_no_effect() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let t1 = spawn_target(&mut world, DVec3::ZERO, 0.5);
        let t2 = spawn_target(&mut world, DVec3::ZERO, 0.5);

        run(&mut world, &[hit(t1, t2)], &mut score, 0, &mut events);
        assert_eq!(score.count(), 0);
        assert!(world.is_alive(t1) && world.is_alive(t2));
    }

    #[test]
    fn test_expired_projectile_cannot_score() {
        let mut world = World::new();
        let mut score = ScoreTracker::new();
        let mut events = Vec::new();
        let p = shot(&mut world);
        let t = spawn_target(&mut world, DVec3::ZERO, 0.5);
        world.destroy(p);

        run(&mut world, &[hit(p, t)], &mut score, 0, &mut events);
        assert_eq!(score.count(), 0);
        assert!(world.is_alive(t));
    }
}
