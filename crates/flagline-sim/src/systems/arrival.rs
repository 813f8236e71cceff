//! Arrival system: enemies at the end of the path cost a life.

use hecs::World;

use flagline_core::components::{Enemy, PathProgress};
use flagline_core::enums::EnemyState;
use flagline_core::events::GameEvent;

use crate::economy::Economy;
use crate::systems::wave_spawner::WaveState;

/// Tombstone every traveling enemy that has reached `path_length`.
pub fn run(
    world: &mut World,
    path_length: f64,
    now: f64,
    economy: &mut Economy,
    wave: &mut WaveState,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (enemy, progress)) in world.query_mut::<(&mut Enemy, &PathProgress)>() {
        if enemy.state != EnemyState::Traveling || progress.distance < path_length {
            continue;
        }
        enemy.state = EnemyState::Arrived;
        wave.arrived += 1;

        let life_lost = economy.register_arrival(now);
        events.push(GameEvent::EnemyArrived {
            faction_id: enemy.faction_id.clone(),
            life_lost,
            lives_remaining: economy.lives,
        });
    }
}
