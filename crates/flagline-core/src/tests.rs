//! Tests for core types: serde, path geometry, stat derivation, faction catalog.

use glam::DVec2;

use crate::abilities::{Effect, EffectStage, TowerModifiers};
use crate::commands::PlayerCommand;
use crate::enums::*;
use crate::error::PathError;
use crate::events::{GameEvent, WaveSummary};
use crate::factions::{Faction, FactionCatalog, CASINO_FACTION_ID};
use crate::path::PathGeometry;
use crate::state::FrameSnapshot;
use crate::stats::*;
use crate::types::{GlobalModifiers, SimTime, UpgradeCounts};

// ---- Serde ----

#[test]
fn test_size_class_serde() {
    for v in [SizeClass::Normal, SizeClass::Reinforced, SizeClass::Boss] {
        let json = serde_json::to_string(&v).unwrap();
        let back: SizeClass = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_wave_phase_serde() {
    for v in [
        WavePhase::Idle,
        WavePhase::Spawning,
        WavePhase::Active,
        WavePhase::Complete,
    ] {
        let json = serde_json::to_string(&v).unwrap();
        let back: WavePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_effect_serde_is_tagged() {
    let effect = Effect::Slow {
        multiplier: 0.5,
        duration: 2.0,
    };
    let json = serde_json::to_string(&effect).unwrap();
    assert!(json.contains("\"kind\":\"slow\""), "got {json}");
    let back: Effect = serde_json::from_str(&json).unwrap();
    assert_eq!(effect, back);
}

#[test]
fn test_target_priority_snake_case() {
    let json = serde_json::to_string(&TargetPriority::Leading).unwrap();
    assert_eq!(json, "\"leading\"");
}

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::StartGame,
        PlayerCommand::StartWave,
        PlayerCommand::PlaceTower {
            faction_id: "us".into(),
            x: 10.0,
            y: 20.0,
            cost: 50,
        },
        PlayerCommand::RemoveTower { x: 1.0, y: 2.0 },
        PlayerCommand::RecordUpgrade {
            axis: UpgradeAxis::Range,
        },
        PlayerCommand::SetTimeScale { scale: 2.0 },
    ];
    for cmd in commands {
        let json = serde_json::to_string(&cmd).unwrap();
        let _back: PlayerCommand = serde_json::from_str(&json).unwrap();
    }
}

#[test]
fn test_game_event_serde() {
    let events = vec![
        GameEvent::EnemyDefeated {
            faction_id: "fr".into(),
            reward: 24,
        },
        GameEvent::WaveComplete(WaveSummary {
            wave_index: 3,
            roster_size: 7,
            spawned: 7,
            defeated: 6,
            arrived: 1,
            factions: vec!["tv".into()],
            forced: false,
        }),
        GameEvent::PlacementRejected {
            faction_id: "us".into(),
            reason: PlacementRejection::OnPath,
        },
    ];
    for event in events {
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = FrameSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.lives, 0);
    assert_eq!(back.phase, GamePhase::Lobby);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(time.dt());
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

// ---- Path geometry ----

fn l_path() -> PathGeometry {
    // 100 right, then 50 down.
    PathGeometry::from_points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0)]).unwrap()
}

#[test]
fn test_path_rejects_short_input() {
    assert_eq!(
        PathGeometry::from_points(&[(0.0, 0.0)]),
        Err(PathError::TooFewWaypoints(1))
    );
    assert_eq!(
        PathGeometry::new(vec![DVec2::ZERO, DVec2::new(f64::NAN, 0.0)]),
        Err(PathError::NonFiniteWaypoint(1))
    );
}

#[test]
fn test_path_total_length() {
    assert_eq!(l_path().total_length(), 150.0);
}

#[test]
fn test_path_clamps_before_start() {
    let path = l_path();
    for d in [0.0, -1.0, -1e9, f64::NEG_INFINITY] {
        assert_eq!(path.position_at(d).position, DVec2::new(0.0, 0.0));
    }
}

#[test]
fn test_path_clamps_past_end() {
    let path = l_path();
    for d in [150.0, 150.0001, 1e9, f64::INFINITY] {
        assert_eq!(path.position_at(d).position, DVec2::new(100.0, 50.0));
    }
}

#[test]
fn test_path_exact_waypoint_boundary() {
    let path = l_path();
    assert_eq!(path.position_at(100.0).position, DVec2::new(100.0, 0.0));
}

#[test]
fn test_path_diagonal_waypoints_are_exact() {
    for k in 0..40 {
        let f = k as f64 * 0.37;
        let path = PathGeometry::from_points(&[
            (0.0, 0.0),
            (1.18 + f, 0.0),
            (1.3 + f, 2.7),
            (4.1, 5.9 + f),
            (7.7 + f, 3.3),
            (9.2, 11.0 + f),
        ])
        .unwrap();

        let mut acc = 0.0;
        for (j, segment) in path.segments().iter().enumerate().take(path.segments().len() - 1) {
            acc += segment.length;
            let waypoint = path.waypoints()[j + 1];
            assert_eq!(path.distance_to_waypoint(j + 1), Some(acc));
            assert_eq!(
                path.position_at(acc).position,
                waypoint,
                "k={k} waypoint {} at d={acc}",
                j + 1
            );
        }
    }
}

#[test]
fn test_path_serde_goes_through_validation() {
    let path = l_path();
    let json = serde_json::to_string(&path).unwrap();
    let decoded: PathGeometry = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, path);
    assert_eq!(decoded.total_length(), 150.0);

    assert!(serde_json::from_str::<PathGeometry>("[]").is_err());
    assert!(serde_json::from_str::<PathGeometry>("[[1.0, 2.0]]").is_err());
    assert!(serde_json::from_str::<PathGeometry>(
        r#"{"waypoints":[],"segments":[],"total_length":0.0}"#
    )
    .is_err());
}

#[test]
fn test_path_interpolates_and_reports_heading() {
    let path = l_path();
    let first = path.position_at(25.0);
    assert_eq!(first.position, DVec2::new(25.0, 0.0));
    assert!(first.heading.abs() < 1e-12, "east heading should be 0");

    let second = path.position_at(125.0);
    assert!((second.position - DVec2::new(100.0, 25.0)).length() < 1e-9);
    assert!((second.heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_path_position_is_idempotent() {
    let path = l_path();
    let a = path.position_at(77.7);
    let b = path.position_at(77.7);
    assert_eq!(a, b);
}

#[test]
fn test_path_zero_length_segment() {
    let path =
        PathGeometry::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap();
    assert_eq!(path.total_length(), 20.0);
    assert_eq!(path.position_at(10.0).position, DVec2::new(10.0, 0.0));
    assert_eq!(path.position_at(15.0).position, DVec2::new(10.0, 5.0));
}

#[test]
fn test_is_on_path_uses_clamped_distance() {
    let path = l_path();
    assert!(path.is_on_path(DVec2::new(50.0, 10.0), 10.0));
    assert!(!path.is_on_path(DVec2::new(50.0, 10.1), 10.0));
    // Beyond the start: distance is to the endpoint, not the infinite line.
    assert!(!path.is_on_path(DVec2::new(-20.0, 0.0), 10.0));
    assert!(path.is_on_path(DVec2::new(-5.0, 0.0), 10.0));
    assert!((path.distance_to_path(DVec2::new(110.0, 25.0)) - 10.0).abs() < 1e-12);
}

// ---- Stat derivation ----

#[test]
fn test_wave_factor_bounds() {
    assert_eq!(wave_factor(0), 1.0);
    assert!((wave_factor(1) - 1.005).abs() < 1e-12);
    assert_eq!(wave_factor(100), 1.5);
    assert_eq!(wave_factor(500), 1.5);
}

#[test]
fn test_hit_points_floor_for_tiny_factions() {
    assert_eq!(base_hit_points(0.01), 5.0);
    assert_eq!(base_hit_points(1.0), 10.0);
    assert_eq!(base_hit_points(100.0), 100.0);
}

#[test]
fn test_monotonic_stat_scaling() {
    let ratings = [0.05, 0.5, 1.0, 8.6, 50.0, 400.0, 2_000.0, 25_000.0];
    for pair in ratings.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        for wave in [1, 10, 50, 100] {
            assert!(
                enemy_hit_points(a, wave, SizeClass::Normal)
                    <= enemy_hit_points(b, wave, SizeClass::Normal),
                "hp not monotonic for {a} < {b} at wave {wave}"
            );
        }
        let global = GlobalModifiers::default();
        assert!(tower_damage(a, &global) <= tower_damage(b, &global));
        assert!(enemy_speed(a) >= enemy_speed(b));
        assert!(enemy_reward(a, SizeClass::Normal) <= enemy_reward(b, SizeClass::Normal));
    }
}

#[test]
fn test_speed_never_reaches_zero() {
    assert!(enemy_speed(1e12) > 0.0);
    assert_eq!(enemy_speed(1e12), 60.0 * 0.3);
}

#[test]
fn test_role_multipliers_are_exact() {
    for rating in [1.0, 4.0, 100.0] {
        let normal = enemy_hit_points(rating, 1, SizeClass::Normal);
        let reinforced = enemy_hit_points(rating, 1, SizeClass::Reinforced);
        let boss = enemy_hit_points(rating, 1, SizeClass::Boss);
        // Equal up to the final floor.
        assert!((boss - 5.0 * normal).abs() < 5.0);
        assert!((reinforced - 2.0 * normal).abs() < 2.0);
    }
    assert_eq!(enemy_hit_points(1.0, 1, SizeClass::Normal), 10.0);
    assert_eq!(enemy_hit_points(1.0, 1, SizeClass::Reinforced), 20.0);
    assert_eq!(enemy_hit_points(1.0, 1, SizeClass::Boss), 50.0);
}

#[test]
fn test_reward_role_bonus() {
    // log10(2) * 5 = 1.505 -> 11
    assert_eq!(enemy_reward(1.0, SizeClass::Normal), 11);
    assert_eq!(enemy_reward(1.0, SizeClass::Reinforced), 27);
    assert_eq!(enemy_reward(1.0, SizeClass::Boss), 110);
}

#[test]
fn test_visual_scale_is_capped() {
    assert!(enemy_visual_scale(1e15, SizeClass::Normal) <= 1.5);
    assert!((enemy_visual_scale(1e15, SizeClass::Boss) - 1.6 * 1.5).abs() < 1e-12);
    assert!(enemy_visual_scale(1.0, SizeClass::Normal) > 1.0);
}

#[test]
fn test_tower_stats_for_power_one() {
    let stats = DerivedTowerStats::derive(1.0, TowerModifiers::NEUTRAL, &GlobalModifiers::default());
    assert_eq!(stats.damage, 3.0);
    assert!((stats.range - (100.0 + 10.0 * 2f64.log10())).abs() < 1e-12);
    assert_eq!(stats.attack_interval, 1.0);
}

#[test]
fn test_tower_stats_apply_modifiers() {
    let global = GlobalModifiers {
        damage: 2.0,
        range: 1.5,
        attack_speed: 2.0,
        currency: 1.0,
    };
    let stats = DerivedTowerStats::derive(150.0, TowerModifiers::new(1.2, 0.8), &global);
    assert_eq!(stats.damage, (3.0 + 2.0) * 2.0);
    let expected_range = (100.0 + 10.0 * 151f64.log10()) * 1.2 * 1.5;
    assert!((stats.range - expected_range).abs() < 1e-9);
    assert!((stats.attack_interval - 0.4).abs() < 1e-12);
}

#[test]
fn test_invalid_power_rating_falls_back() {
    assert_eq!(enemy_speed(f64::NAN), enemy_speed(1.0));
    assert_eq!(enemy_hit_points(-3.0, 1, SizeClass::Normal), 10.0);
}

#[test]
fn test_upgrades_feed_global_modifiers() {
    let mut counts = UpgradeCounts::default();
    counts.record(UpgradeAxis::Damage);
    counts.record(UpgradeAxis::Damage);
    counts.record(UpgradeAxis::Currency);
    let mods = GlobalModifiers::from_upgrades(&counts);
    assert!((mods.damage - 1.2).abs() < 1e-12);
    assert!((mods.currency - 1.1).abs() < 1e-12);
    assert_eq!(mods.range, 1.0);
}

// ---- Faction catalog ----

#[test]
fn test_builtin_catalog_is_large_and_valid() {
    let catalog = FactionCatalog::builtin();
    assert!(catalog.len() > 150, "got {}", catalog.len());
    for faction in catalog.iter() {
        assert!(faction.power_rating > 0.0, "{} has bad power", faction.id);
        assert!(
            faction.palette.len() >= 2,
            "{} needs at least two colors",
            faction.id
        );
    }
}

#[test]
fn test_catalog_sorted_by_power() {
    let catalog = FactionCatalog::builtin();
    let powers: Vec<f64> = catalog.sorted_by_power().map(|f| f.power_rating).collect();
    assert!(powers.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(catalog.sorted_by_power().last().unwrap().id, "us");
}

#[test]
fn test_catalog_tiers_partition_table() {
    let catalog = FactionCatalog::builtin();
    let total: usize = PowerTier::ALL.iter().map(|&t| catalog.tier(t).count()).sum();
    assert_eq!(total, catalog.len());
    assert!(catalog.tier(PowerTier::Super).any(|f| f.id == "cn"));
    assert!(catalog.tier(PowerTier::Micro).all(|f| f.power_rating < 1.0));
}

#[test]
fn test_unknown_faction_falls_back() {
    let catalog = FactionCatalog::builtin();
    assert_eq!(catalog.power_of("atlantis"), 1.0);
    assert!(catalog.abilities_of("atlantis").is_empty());
    assert_eq!(catalog.tower_modifiers_of("atlantis"), TowerModifiers::NEUTRAL);
}

#[test]
fn test_casino_faction_declares_random_money() {
    let catalog = FactionCatalog::builtin();
    let casino = catalog.get(CASINO_FACTION_ID).unwrap();
    assert!(casino
        .abilities
        .iter()
        .any(|e| matches!(e, Effect::Casino { .. })));
    let casino_count = catalog
        .iter()
        .filter(|f| f.abilities.iter().any(|e| matches!(e, Effect::Casino { .. })))
        .count();
    assert_eq!(casino_count, 1);
}

#[test]
fn test_custom_catalog_and_duplicates() {
    let catalog = FactionCatalog::from_factions(vec![
        Faction::new("alpha", "Alpha", 1.0),
        Faction::new("beta", "Beta", 1.0),
        Faction::new("alpha", "Alpha Again", 99.0),
        Faction::new("broken", "Broken", -4.0),
    ]);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("alpha").unwrap().display_name, "Alpha");
    assert_eq!(catalog.power_of("broken"), 1.0);
}

#[test]
fn test_flag_glyph_from_iso_code() {
    let faction = Faction::new("fr", "France", 2782.9);
    assert_eq!(faction.flag, "\u{1F1EB}\u{1F1F7}");
    assert_eq!(Faction::new("alpha", "Alpha", 1.0).flag, "\u{1F3F3}");
}

#[test]
fn test_effect_stage_order() {
    let mut stages = vec![
        Effect::Money { multiplier: 1.0 }.stage(),
        Effect::Pierce { extra: 1 }.stage(),
        Effect::Critical {
            chance: 0.2,
            multiplier: 2.0,
        }
        .stage(),
        Effect::Splash { multiplier: 1.0 }.stage(),
    ];
    stages.sort();
    assert_eq!(
        stages,
        vec![
            EffectStage::Damage,
            EffectStage::Splash,
            EffectStage::Pierce,
            EffectStage::Money
        ]
    );
}

#[test]
fn test_within_power_window() {
    let catalog = FactionCatalog::builtin();
    assert!(catalog.within_power(0.0, 1.0).all(|f| f.power_rating <= 1.0));
    assert!(catalog.within_power(0.0, 1.0).count() >= 10);
}
