//! Entity spawn factories for the simulation world.
//!
//! Creates enemy and tower entities with their full component bundles,
//! deriving stats from the faction catalog at spawn time.

use hecs::World;

use flagline_core::components::*;
use flagline_core::enums::*;
use flagline_core::factions::FactionCatalog;
use flagline_core::path::PathGeometry;
use flagline_core::stats::{DerivedTowerStats, EnemyStats};
use flagline_core::types::{GlobalModifiers, Heading, Position};

/// Built-in path across an 800x600 playfield: enters left, snakes twice, exits right.
pub const DEFAULT_WAYPOINTS: [(f64, f64); 6] = [
    (0.0, 100.0),
    (600.0, 100.0),
    (600.0, 300.0),
    (200.0, 300.0),
    (200.0, 500.0),
    (800.0, 500.0),
];

/// Spawn an enemy at the start of `path`.
pub fn spawn_enemy(
    world: &mut World,
    catalog: &FactionCatalog,
    path: &PathGeometry,
    faction_id: &str,
    size: SizeClass,
    wave: u32,
    spawn_seq: u64,
) -> hecs::Entity {
    let stats = EnemyStats::derive(catalog.power_of(faction_id), wave, size);
    let start = path.position_at(0.0);

    world.spawn((
        Enemy {
            faction_id: faction_id.to_string(),
            size,
            reward: stats.reward,
            spawn_seq,
            state: EnemyState::Traveling,
        },
        Health {
            current: stats.hit_points,
            max: stats.hit_points,
        },
        PathProgress {
            distance: 0.0,
            speed: stats.speed,
        },
        SpeedModifier::default(),
        start.position,
        Heading(start.heading),
        VisualScale(stats.visual_scale),
    ))
}

/// Spawn a tower at `position`. Placement validity is the caller's concern.
pub fn spawn_tower(
    world: &mut World,
    catalog: &FactionCatalog,
    modifiers: &GlobalModifiers,
    faction_id: &str,
    position: Position,
    placed_at_wave: u32,
    placement_seq: u64,
) -> hecs::Entity {
    let stats = tower_stats(catalog, modifiers, faction_id);

    world.spawn((
        Tower {
            faction_id: faction_id.to_string(),
            placed_at_wave,
            last_fired_at: None,
            attack_interval: stats.attack_interval,
            placement_seq,
        },
        TowerStats {
            range: stats.range,
            damage: stats.damage,
        },
        position,
    ))
}

/// Re-derive every tower's stats after the global modifiers change.
pub fn refresh_tower_stats(world: &mut World, catalog: &FactionCatalog, modifiers: &GlobalModifiers) {
    for (_entity, (tower, stats)) in world.query_mut::<(&mut Tower, &mut TowerStats)>() {
        let derived = tower_stats(catalog, modifiers, &tower.faction_id);
        tower.attack_interval = derived.attack_interval;
        stats.range = derived.range;
        stats.damage = derived.damage;
    }
}

fn tower_stats(
    catalog: &FactionCatalog,
    modifiers: &GlobalModifiers,
    faction_id: &str,
) -> DerivedTowerStats {
    DerivedTowerStats::derive(
        catalog.power_of(faction_id),
        catalog.tower_modifiers_of(faction_id),
        modifiers,
    )
}
