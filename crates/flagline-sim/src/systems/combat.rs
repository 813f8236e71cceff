//! Combat system: towers off cooldown pick a target, resolve abilities and
//! apply the outcome.
//!
//! Towers act in placement order. Each tower sees the roster as left by the
//! towers before it, so an enemy defeated earlier in the tick is not targeted again.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use flagline_abilities::{resolve_attack, AbilityOutcome, AttackContext, Target};
use flagline_core::components::{Enemy, Health, PathProgress, SpeedModifier, Tower, TowerStats};
use flagline_core::enums::{EnemyState, TargetPriority};
use flagline_core::events::GameEvent;
use flagline_core::factions::FactionCatalog;
use flagline_core::types::Position;

use crate::economy::Economy;
use crate::systems::wave_spawner::WaveState;

/// Slack for cooldowns measured against an accumulated float clock.
const COOLDOWN_EPSILON: f64 = 1e-9;

/// A tower ready to fire this tick.
struct ReadyTower {
    entity: Entity,
    faction_id: String,
    position: Position,
    range: f64,
    damage: f64,
    placement_seq: u64,
}

/// A live enemy as seen by targeting.
struct Candidate {
    target: Target<Entity>,
    spawn_seq: u64,
    distance: f64,
}

/// Whether a tower that last fired at `last_fired_at` may fire at `now`.
pub fn is_ready(last_fired_at: Option<f64>, attack_interval: f64, now: f64) -> bool {
    match last_fired_at {
        None => true,
        Some(last) => now - last + COOLDOWN_EPSILON >= attack_interval,
    }
}

/// Run one combat pass.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    catalog: &FactionCatalog,
    targeting: TargetPriority,
    now: f64,
    rng: &mut ChaCha8Rng,
    economy: &mut Economy,
    wave: &mut WaveState,
    events: &mut Vec<GameEvent>,
) {
    let mut towers: Vec<ReadyTower> = world
        .query::<(&Tower, &TowerStats, &Position)>()
        .iter()
        .filter(|(_, (tower, _, _))| is_ready(tower.last_fired_at, tower.attack_interval, now))
        .map(|(entity, (tower, stats, pos))| ReadyTower {
            entity,
            faction_id: tower.faction_id.clone(),
            position: *pos,
            range: stats.range,
            damage: stats.damage,
            placement_seq: tower.placement_seq,
        })
        .collect();
    towers.sort_by_key(|t| t.placement_seq);

    for tower in towers {
        let roster = live_roster(world);
        let Some(primary) = select_target(&roster, tower.position, tower.range, targeting) else {
            continue;
        };
        let enemies: Vec<Target<Entity>> = roster.iter().map(|c| c.target).collect();

        let ctx = AttackContext {
            attacker_faction: &tower.faction_id,
            base_damage: tower.damage,
            origin: tower.position,
            now,
        };
        let mut on_bonus = |amount: u32| {
            let credited = economy.earn(amount);
            events.push(GameEvent::BonusCurrency {
                faction_id: tower.faction_id.clone(),
                amount: credited,
            });
        };
        let outcome = resolve_attack(
            catalog,
            &ctx,
            &primary,
            &enemies,
            rng,
            Some(&mut on_bonus as &mut dyn FnMut(u32)),
        );

        apply_outcome(world, &outcome, economy, wave, events);

        if let Some(until) = outcome.shield_until {
            economy.raise_shield(until);
        }
        if !outcome.side_effects.is_empty() {
            events.push(GameEvent::AbilityTriggered {
                faction_id: tower.faction_id.clone(),
                labels: outcome.side_effects.clone(),
            });
        }
        if let Ok(mut t) = world.get::<&mut Tower>(tower.entity) {
            t.last_fired_at = Some(now);
        }
    }
}

/// Traveling enemies in spawn order.
fn live_roster(world: &World) -> Vec<Candidate> {
    let mut roster: Vec<Candidate> = world
        .query::<(&Enemy, &Position, &PathProgress)>()
        .iter()
        .filter(|(_, (enemy, _, _))| enemy.state == EnemyState::Traveling)
        .map(|(entity, (enemy, pos, progress))| Candidate {
            target: Target {
                handle: entity,
                position: *pos,
                reward: enemy.reward,
            },
            spawn_seq: enemy.spawn_seq,
            distance: progress.distance,
        })
        .collect();
    roster.sort_by_key(|c| c.spawn_seq);
    roster
}

/// Pick the primary target among enemies within `range` of `origin`.
fn select_target(
    roster: &[Candidate],
    origin: Position,
    range: f64,
    targeting: TargetPriority,
) -> Option<Target<Entity>> {
    let mut in_range = roster
        .iter()
        .filter(|c| c.target.position.distance(origin) <= range);

    let chosen = match targeting {
        // Roster is already in spawn order.
        TargetPriority::First => in_range.next(),
        TargetPriority::Leading => in_range.fold(None, |best: Option<&Candidate>, c| match best {
            Some(b) if b.distance >= c.distance => Some(b),
            _ => Some(c),
        }),
    };
    chosen.map(|c| c.target)
}

/// Damage, defeat and slow every affected enemy.
fn apply_outcome(
    world: &mut World,
    outcome: &AbilityOutcome<Entity>,
    economy: &mut Economy,
    wave: &mut WaveState,
    events: &mut Vec<GameEvent>,
) {
    for &entity in &outcome.affected {
        let Ok((enemy, health, modifier)) =
            world.query_one_mut::<(&mut Enemy, &mut Health, &mut SpeedModifier)>(entity)
        else {
            continue;
        };
        if enemy.state != EnemyState::Traveling {
            continue;
        }

        health.current = (health.current - outcome.total_damage).max(0.0);
        if health.current <= 0.0 {
            enemy.state = EnemyState::Defeated;
            wave.defeated += 1;
            let reward = economy.earn(enemy.reward);
            events.push(GameEvent::EnemyDefeated {
                faction_id: enemy.faction_id.clone(),
                reward,
            });
            continue;
        }

        if let Some(slow) = outcome.slow {
            *modifier = SpeedModifier {
                multiplier: slow.multiplier,
                expires_at: slow.expires_at,
            };
        }
    }
}
