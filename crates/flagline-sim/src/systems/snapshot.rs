//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use flagline_core::components::*;
use flagline_core::enums::*;
use flagline_core::events::GameEvent;
use flagline_core::state::*;
use flagline_core::types::{Heading, Position, SimTime};

use crate::economy::Economy;
use crate::systems::wave_spawner::WaveState;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    economy: &Economy,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let now = time.elapsed_secs;

    FrameSnapshot {
        time: *time,
        phase,
        wave: WaveView {
            index: wave.index,
            phase: wave.phase,
            roster_size: wave.roster_size,
            spawned: wave.spawned,
            pending: wave.pending.len() as u32,
        },
        currency: economy.currency,
        lives: economy.lives,
        shield_active: economy.shield_active(now),
        modifiers: economy.modifiers,
        enemies: build_enemies(world, now),
        towers: build_towers(world, now),
        events,
    }
}

/// Build EnemyView list for traveling enemies, in spawn order.
fn build_enemies(world: &World, now: f64) -> Vec<EnemyView> {
    let mut enemies: Vec<(u64, EnemyView)> = world
        .query::<(&Enemy, &Health, &Position, &Heading, &VisualScale, &SpeedModifier)>()
        .iter()
        .filter(|(_, (enemy, ..))| enemy.state == EnemyState::Traveling)
        .map(|(entity, (enemy, health, pos, heading, scale, modifier))| {
            let view = EnemyView {
                id: entity.to_bits().get(),
                faction_id: enemy.faction_id.clone(),
                position: *pos,
                heading: heading.0,
                health_ratio: if health.max > 0.0 {
                    (health.current / health.max).clamp(0.0, 1.0)
                } else {
                    0.0
                },
                size: enemy.size,
                scale: scale.0,
                slowed: modifier.multiplier < 1.0 && now < modifier.expires_at,
            };
            (enemy.spawn_seq, view)
        })
        .collect();

    enemies.sort_by_key(|(seq, _)| *seq);
    enemies.into_iter().map(|(_, view)| view).collect()
}

/// Build TowerView list, in placement order.
fn build_towers(world: &World, now: f64) -> Vec<TowerView> {
    let mut towers: Vec<(u64, TowerView)> = world
        .query::<(&Tower, &TowerStats, &Position)>()
        .iter()
        .map(|(entity, (tower, stats, pos))| {
            let cooldown_phase = match tower.last_fired_at {
                Some(last) if tower.attack_interval > 0.0 => {
                    ((now - last) / tower.attack_interval).clamp(0.0, 1.0)
                }
                _ => 1.0,
            };
            let view = TowerView {
                id: entity.to_bits().get(),
                faction_id: tower.faction_id.clone(),
                position: *pos,
                range: stats.range,
                cooldown_phase,
                placed_at_wave: tower.placed_at_wave,
            };
            (tower.placement_seq, view)
        })
        .collect();

    towers.sort_by_key(|(seq, _)| *seq);
    towers.into_iter().map(|(_, view)| view).collect()
}
