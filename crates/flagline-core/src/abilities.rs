//! Declarative ability descriptors attached to factions.
//!
//! The resolution engine interprets this closed set of kinds; a faction can
//! compose any subset of them.

use serde::{Deserialize, Serialize};

/// A single per-attack effect descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Multiply base damage.
    Damage { multiplier: f64 },
    /// Roll once per attack; on success substitute `multiplier`.
    Critical { chance: f64, multiplier: f64 },
    /// Hit everything within the splash radius of the primary target.
    Splash { multiplier: f64 },
    /// Hit up to `targets` enemies in total.
    Multi { targets: u32 },
    /// Hit up to `extra` enemies lined up behind the primary target.
    Pierce { extra: u32 },
    /// Scale speed by `multiplier` for `duration` seconds. 0 stops, negative knocks back.
    Slow { multiplier: f64, duration: f64 },
    /// Bonus currency proportional to the primary target's reward.
    Money { multiplier: f64 },
    /// Bonus currency with a uniformly random multiplier.
    Casino {
        min_multiplier: f64,
        max_multiplier: f64,
    },
    /// Arrivals cost no lives for `duration` seconds.
    Shield { duration: f64 },
}

/// Position of an effect kind in the fixed resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectStage {
    Damage,
    Splash,
    Multi,
    Pierce,
    Slow,
    Money,
    Shield,
}

impl Effect {
    pub fn stage(&self) -> EffectStage {
        match self {
            Effect::Damage { .. } | Effect::Critical { .. } => EffectStage::Damage,
            Effect::Splash { .. } => EffectStage::Splash,
            Effect::Multi { .. } => EffectStage::Multi,
            Effect::Pierce { .. } => EffectStage::Pierce,
            Effect::Slow { .. } => EffectStage::Slow,
            Effect::Money { .. } | Effect::Casino { .. } => EffectStage::Money,
            Effect::Shield { .. } => EffectStage::Shield,
        }
    }
}

/// Tower-level modifiers applied once at stat-derivation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerModifiers {
    pub range: f64,
    /// Multiplier on the attack interval. Below 1 fires faster.
    pub attack_interval: f64,
}

impl Default for TowerModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TowerModifiers {
    pub const NEUTRAL: TowerModifiers = TowerModifiers {
        range: 1.0,
        attack_interval: 1.0,
    };

    pub const fn new(range: f64, attack_interval: f64) -> Self {
        Self {
            range,
            attack_interval,
        }
    }
}
