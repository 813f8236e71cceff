//! Derived combat statistics.
//!
//! Every stat is a pure function of a faction's power rating plus context
//! (wave, size class, modifiers). Square-root and log scaling keep both ends
//! of a power range spanning several orders of magnitude playable.

use serde::{Deserialize, Serialize};

use crate::abilities::TowerModifiers;
use crate::constants::*;
use crate::enums::SizeClass;
use crate::types::GlobalModifiers;

fn sanitize(power_rating: f64) -> f64 {
    if power_rating.is_finite() && power_rating > 0.0 {
        power_rating
    } else {
        FALLBACK_POWER_RATING
    }
}

/// `log10(g + 1)`, the decade count most stats scale with.
fn decades(power_rating: f64) -> f64 {
    (sanitize(power_rating) + 1.0).log10()
}

/// Hit-point ramp for wave `wave`: 1.0 at wave 0, 1.5 at wave 100 and beyond.
pub fn wave_factor(wave: u32) -> f64 {
    let progress = (wave as f64 / WAVE_HIT_POINT_RAMP_WAVES).min(1.0);
    1.0 + progress * WAVE_HIT_POINT_RAMP
}

/// Hit points before wave and size scaling.
pub fn base_hit_points(power_rating: f64) -> f64 {
    (sanitize(power_rating).sqrt() * ENEMY_HIT_POINTS_SCALE)
        .floor()
        .max(ENEMY_MIN_BASE_HIT_POINTS)
}

pub fn enemy_hit_points(power_rating: f64, wave: u32, size: SizeClass) -> f64 {
    (base_hit_points(power_rating) * wave_factor(wave) * size.hit_point_multiplier()).floor()
}

/// Pixels per second. Stronger factions move slower, never below the floor.
pub fn enemy_speed(power_rating: f64) -> f64 {
    let factor = (1.0 - decades(power_rating) / 10.0).max(ENEMY_MIN_SPEED_FACTOR);
    ENEMY_BASE_SPEED * factor
}

pub fn enemy_reward(power_rating: f64, size: SizeClass) -> u32 {
    let base = ENEMY_BASE_REWARD + (decades(power_rating) * ENEMY_REWARD_PER_DECADE).floor();
    (base * size.reward_bonus()).floor() as u32
}

pub fn enemy_visual_scale(power_rating: f64, size: SizeClass) -> f64 {
    let growth = (1.0 + decades(power_rating) * ENEMY_SCALE_PER_DECADE).min(ENEMY_MAX_SCALE_FACTOR);
    size.base_scale() * growth
}

pub fn tower_range(power_rating: f64, modifiers: TowerModifiers, global: &GlobalModifiers) -> f64 {
    (TOWER_BASE_RANGE + TOWER_RANGE_PER_DECADE * decades(power_rating)) * modifiers.range * global.range
}

pub fn tower_damage(power_rating: f64, global: &GlobalModifiers) -> f64 {
    (TOWER_BASE_DAMAGE + decades(power_rating).floor()) * global.damage
}

/// Seconds between attacks.
pub fn tower_attack_interval(modifiers: TowerModifiers, global: &GlobalModifiers) -> f64 {
    TOWER_BASE_ATTACK_INTERVAL * modifiers.attack_interval / global.attack_speed
}

/// All enemy stats for one spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub hit_points: f64,
    pub speed: f64,
    pub reward: u32,
    pub visual_scale: f64,
}

impl EnemyStats {
    pub fn derive(power_rating: f64, wave: u32, size: SizeClass) -> Self {
        Self {
            hit_points: enemy_hit_points(power_rating, wave, size),
            speed: enemy_speed(power_rating),
            reward: enemy_reward(power_rating, size),
            visual_scale: enemy_visual_scale(power_rating, size),
        }
    }
}

/// All tower stats for one placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedTowerStats {
    pub range: f64,
    pub damage: f64,
    pub attack_interval: f64,
}

impl DerivedTowerStats {
    pub fn derive(power_rating: f64, modifiers: TowerModifiers, global: &GlobalModifiers) -> Self {
        let global = global.sanitized();
        Self {
            range: tower_range(power_rating, modifiers, &global),
            damage: tower_damage(power_rating, &global),
            attack_interval: tower_attack_interval(modifiers, &global),
        }
    }
}
