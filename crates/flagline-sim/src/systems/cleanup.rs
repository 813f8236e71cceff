//! Cleanup system: despawns tombstoned enemies once per tick.

use hecs::{Entity, World};

use flagline_core::components::Enemy;
use flagline_core::enums::EnemyState;

/// Remove enemies in a terminal state.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if matches!(enemy.state, EnemyState::Defeated | EnemyState::Arrived) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Number of enemies still on the path.
pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.state == EnemyState::Traveling)
        .count()
}
