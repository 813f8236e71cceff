//! Tests for ability resolution: identity, each effect kind, ordering and degradation.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flagline_core::abilities::Effect;
use flagline_core::factions::{Faction, FactionCatalog, CASINO_FACTION_ID};

use crate::resolve::{resolve_attack, AbilityOutcome, AttackContext, Target};

fn catalog() -> FactionCatalog {
    FactionCatalog::from_factions(vec![
        Faction::new("plain", "Plain", 1.0),
        Faction::new("heavy", "Heavy", 10.0).with_abilities(&[Effect::Damage { multiplier: 2.0 }]),
        Faction::new("splasher", "Splasher", 10.0)
            .with_abilities(&[Effect::Splash { multiplier: 1.5 }]),
        Faction::new("multi", "Multi", 10.0).with_abilities(&[Effect::Multi { targets: 3 }]),
        Faction::new("piercer", "Piercer", 10.0).with_abilities(&[Effect::Pierce { extra: 2 }]),
        Faction::new("lucky", "Lucky", 10.0).with_abilities(&[Effect::Critical {
            chance: 1.0,
            multiplier: 3.0,
        }]),
        Faction::new("unlucky", "Unlucky", 10.0).with_abilities(&[Effect::Critical {
            chance: 0.0,
            multiplier: 3.0,
        }]),
        Faction::new("freezer", "Freezer", 10.0).with_abilities(&[
            Effect::Slow {
                multiplier: 0.5,
                duration: 2.0,
            },
            Effect::Slow {
                multiplier: 0.0,
                duration: 1.0,
            },
        ]),
        Faction::new("pusher", "Pusher", 10.0).with_abilities(&[Effect::Slow {
            multiplier: -0.5,
            duration: 0.5,
        }]),
        Faction::new("banker", "Banker", 10.0).with_abilities(&[Effect::Money { multiplier: 0.5 }]),
        Faction::new("gambler", "Gambler", 10.0).with_abilities(&[Effect::Casino {
            min_multiplier: 1.0,
            max_multiplier: 2.0,
        }]),
        Faction::new("guardian", "Guardian", 10.0)
            .with_abilities(&[Effect::Shield { duration: 4.0 }]),
        // Declared out of order on purpose.
        Faction::new("combo", "Combo", 10.0).with_abilities(&[
            Effect::Money { multiplier: 1.0 },
            Effect::Splash { multiplier: 0.5 },
            Effect::Damage { multiplier: 4.0 },
        ]),
    ])
}

fn target(handle: u32, x: f64, y: f64) -> Target<u32> {
    Target {
        handle,
        position: DVec2::new(x, y),
        reward: 20,
    }
}

fn ctx(faction: &str, base_damage: f64) -> AttackContext<'_> {
    AttackContext {
        attacker_faction: faction,
        base_damage,
        origin: DVec2::ZERO,
        now: 10.0,
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// Five enemies: 0 is primary at (200, 0); 1 is 40 away; 2, 3, 4 are far.
fn roster() -> Vec<Target<u32>> {
    vec![
        target(0, 200.0, 0.0),
        target(1, 240.0, 0.0),
        target(2, 400.0, 300.0),
        target(3, 0.0, 500.0),
        target(4, -300.0, -300.0),
    ]
}

#[test]
fn test_unknown_faction_is_identity() {
    let t = target(9, 50.0, 50.0);
    let outcome = resolve_attack(
        &catalog(),
        &ctx("nonexistent-faction", 100.0),
        &t,
        &[t],
        &mut rng(),
        None,
    );
    assert_eq!(outcome, AbilityOutcome::identity(9, 100.0));
    assert_eq!(outcome.total_damage, 100.0);
    assert_eq!(outcome.affected, vec![9]);
    assert!(outcome.side_effects.is_empty());
}

#[test]
fn test_faction_without_effects_is_identity() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("plain", 7.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(outcome, AbilityOutcome::identity(0, 7.0));
}

#[test]
fn test_damage_multiplier() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("heavy", 5.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(outcome.total_damage, 10.0);
    assert_eq!(outcome.affected, vec![0]);
    assert_eq!(outcome.side_effects, vec!["damage x2".to_string()]);
}

#[test]
fn test_splash_containment() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("splasher", 10.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(outcome.affected, vec![0, 1]);
    assert_eq!(outcome.total_damage, 15.0);
    assert_eq!(outcome.side_effects, vec!["splash".to_string()]);
}

#[test]
fn test_multi_takes_next_in_roster_order() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("multi", 10.0), &enemies[2], &enemies, &mut rng(), None);
    assert_eq!(outcome.affected, vec![2, 0, 1]);
    assert_eq!(outcome.total_damage, 10.0);
}

#[test]
fn test_multi_with_small_roster() {
    let enemies = vec![target(0, 10.0, 10.0)];
    let outcome = resolve_attack(&catalog(), &ctx("multi", 10.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(outcome.affected, vec![0]);
}

#[test]
fn test_pierce_follows_bearing() {
    // Primary due east of the origin; 1 and 2 further east on the same line,
    // 3 slightly off-line, 4 north.
    let enemies = vec![
        target(0, 100.0, 0.0),
        target(1, 150.0, 1.0),
        target(2, 300.0, -2.0),
        target(3, 200.0, 60.0),
        target(4, 0.0, 200.0),
        target(5, 400.0, 0.0),
    ];
    let outcome = resolve_attack(&catalog(), &ctx("piercer", 4.0), &enemies[0], &enemies, &mut rng(), None);
    // Capped at 2 extra, taken in roster order.
    assert_eq!(outcome.affected, vec![0, 1, 2]);
    assert_eq!(outcome.side_effects, vec!["pierce +2".to_string()]);
}

#[test]
fn test_critical_always_and_never() {
    let enemies = roster();
    let hit = resolve_attack(&catalog(), &ctx("lucky", 5.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(hit.total_damage, 15.0);
    assert_eq!(hit.side_effects, vec!["critical".to_string()]);

    let miss = resolve_attack(&catalog(), &ctx("unlucky", 5.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(miss.total_damage, 5.0);
    assert!(miss.side_effects.is_empty());
}

#[test]
fn test_critical_rate_is_roughly_its_chance() {
    let catalog = FactionCatalog::builtin();
    let enemies = roster();
    let mut rng = rng();
    let crits = (0..2_000)
        .filter(|_| {
            resolve_attack(&catalog, &ctx("jp", 1.0), &enemies[0], &enemies, &mut rng, None)
                .side_effects
                .iter()
                .any(|s| s == "critical")
        })
        .count();
    // 20% chance: expect ~400.
    assert!((300..500).contains(&crits), "got {crits} crits");
}

#[test]
fn test_strongest_slow_wins() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("freezer", 1.0), &enemies[0], &enemies, &mut rng(), None);
    let slow = outcome.slow.unwrap();
    assert_eq!(slow.multiplier, 0.0);
    assert_eq!(slow.expires_at, 11.0);
    assert_eq!(outcome.side_effects, vec!["slow".to_string(), "stop".to_string()]);
}

#[test]
fn test_knockback_label() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("pusher", 1.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(outcome.slow.unwrap().multiplier, -0.5);
    assert_eq!(outcome.side_effects, vec!["knockback".to_string()]);
}

#[test]
fn test_money_invokes_callback() {
    let enemies = roster();
    let mut received = Vec::new();
    let mut on_bonus = |amount: u32| received.push(amount);
    let outcome = resolve_attack(
        &catalog(),
        &ctx("banker", 1.0),
        &enemies[0],
        &enemies,
        &mut rng(),
        Some(&mut on_bonus as &mut dyn FnMut(u32)),
    );
    assert_eq!(outcome.bonus_currency, 10);
    assert_eq!(received, vec![10]);
}

#[test]
fn test_casino_is_bounded_and_seeded() {
    let enemies = roster();
    let mut amounts = Vec::new();
    let mut rng_a = rng();
    for _ in 0..200 {
        let outcome = resolve_attack(&catalog(), &ctx("gambler", 1.0), &enemies[0], &enemies, &mut rng_a, None);
        assert!((20..=40).contains(&outcome.bonus_currency));
        amounts.push(outcome.bonus_currency);
    }
    assert!(amounts.iter().any(|&a| a != amounts[0]), "casino should vary");

    let mut rng_b = rng();
    let replay: Vec<u32> = (0..200)
        .map(|_| {
            resolve_attack(&catalog(), &ctx("gambler", 1.0), &enemies[0], &enemies, &mut rng_b, None)
                .bonus_currency
        })
        .collect();
    assert_eq!(amounts, replay, "same seed must replay the same bonuses");
}

#[test]
fn test_builtin_casino_faction() {
    let catalog = FactionCatalog::builtin();
    let enemies = roster();
    let mut rng = rng();
    let outcome = resolve_attack(
        &catalog,
        &ctx(CASINO_FACTION_ID, 1.0),
        &enemies[0],
        &enemies,
        &mut rng,
        None,
    );
    assert!(outcome.bonus_currency <= 60);
}

#[test]
fn test_shield_until() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("guardian", 1.0), &enemies[0], &enemies, &mut rng(), None);
    assert_eq!(outcome.shield_until, Some(14.0));
}

#[test]
fn test_fixed_order_regardless_of_declaration() {
    let enemies = roster();
    let outcome = resolve_attack(&catalog(), &ctx("combo", 2.0), &enemies[0], &enemies, &mut rng(), None);
    // damage x4 then splash x0.5 then money.
    assert_eq!(outcome.total_damage, 4.0);
    assert_eq!(outcome.affected, vec![0, 1]);
    assert_eq!(
        outcome.side_effects,
        vec!["damage x4".to_string(), "splash".to_string(), "+20".to_string()]
    );
}

#[test]
fn test_primary_missing_from_roster_degrades() {
    let enemies = roster();
    let stray = target(99, 210.0, 0.0);
    let outcome = resolve_attack(&catalog(), &ctx("splasher", 10.0), &stray, &enemies, &mut rng(), None);
    assert_eq!(outcome.affected[0], 99);
    assert!(outcome.affected.contains(&0));
    assert!(outcome.affected.contains(&1));

    let empty: Vec<Target<u32>> = Vec::new();
    let alone = resolve_attack(&catalog(), &ctx("multi", 10.0), &stray, &empty, &mut rng(), None);
    assert_eq!(alone.affected, vec![99]);
}

#[test]
fn test_bad_base_damage_is_zero() {
    let enemies = roster();
    for bad in [f64::NAN, -5.0, f64::INFINITY] {
        let outcome = resolve_attack(&catalog(), &ctx("heavy", bad), &enemies[0], &enemies, &mut rng(), None);
        assert_eq!(outcome.total_damage, 0.0);
    }
}
