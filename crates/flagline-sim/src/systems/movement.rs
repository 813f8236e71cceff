//! Path-following integration.
//!
//! Advances each traveling enemy's arc length by speed * dt * modifier,
//! then re-derives position and heading from the path.

use hecs::World;

use flagline_core::components::{Enemy, PathProgress, SpeedModifier};
use flagline_core::enums::EnemyState;
use flagline_core::path::PathGeometry;
use flagline_core::types::{Heading, Position};

/// Run path integration for all traveling enemies.
pub fn run(world: &mut World, path: &PathGeometry, now: f64, dt: f64) {
    for (_entity, (enemy, progress, modifier, pos, heading)) in world.query_mut::<(
        &Enemy,
        &mut PathProgress,
        &mut SpeedModifier,
        &mut Position,
        &mut Heading,
    )>() {
        if enemy.state != EnemyState::Traveling {
            continue;
        }
        if now >= modifier.expires_at {
            *modifier = SpeedModifier::default();
        }

        // Knock-back may move an enemy backwards, never before the spawn point.
        progress.distance = (progress.distance + progress.speed * dt * modifier.multiplier).max(0.0);

        let point = path.position_at(progress.distance);
        *pos = point.position;
        heading.0 = point.heading;
    }
}
