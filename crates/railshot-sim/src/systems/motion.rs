//! Player motion: maps movement intents to a bounded x/y position.
//!
//! Motion is applied as a direct translation. An intent that points out of
//! the bounds is dropped for its axis; an axis that is already out of bounds
//! (forced there externally) does not move until it is back inside.

use glam::DVec2;
use hecs::World;

use railshot_core::commands::InputIntents;
use railshot_core::components::{Steering, Transform};

/// Move every steerable entity according to this tick's intents.
pub fn run(world: &mut World, intents: &InputIntents, dt: f64) {
    for (_entity, (transform, steering)) in world.query_mut::<(&mut Transform, &Steering)>() {
        let current = transform.position.truncate();
        let next = step(current, intents, steering, dt);
        transform.position.x = next.x;
        transform.position.y = next.y;
    }
}

/// Position after one tick of steering from `position`.
pub fn step(position: DVec2, intents: &InputIntents, steering: &Steering, dt: f64) -> DVec2 {
    let bounds = &steering.bounds;
    let x_free = bounds.contains_x(position.x);
    let y_free = bounds.contains_y(position.y);

    let mut direction = DVec2::ZERO;
    if x_free {
        if intents.move_left && position.x > bounds.min_x {
            direction.x -= 1.0;
        }
        if intents.move_right && position.x < bounds.max_x {
            direction.x += 1.0;
        }
    }
    if y_free {
        if intents.move_down && position.y > bounds.min_y {
            direction.y -= 1.0;
        }
        if intents.move_up && position.y < bounds.max_y {
            direction.y += 1.0;
        }
    }

    let mut next = position + direction.normalize_or_zero() * steering.slide_rate * dt;
    if x_free {
        next.x = next.x.clamp(bounds.min_x, bounds.max_x);
    }
    if y_free {
        next.y = next.y.clamp(bounds.min_y, bounds.max_y);
    }
    next
}
