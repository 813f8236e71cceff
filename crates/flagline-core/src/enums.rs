//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy size class. Scales hit points, reward and visual size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    #[default]
    Normal,
    Reinforced,
    Boss,
}

impl SizeClass {
    /// Hit-point multiplier.
    pub fn hit_point_multiplier(self) -> f64 {
        match self {
            SizeClass::Normal => 1.0,
            SizeClass::Reinforced => 2.0,
            SizeClass::Boss => 5.0,
        }
    }

    /// Kill-reward multiplier.
    pub fn reward_bonus(self) -> f64 {
        match self {
            SizeClass::Normal => 1.0,
            SizeClass::Reinforced => 2.5,
            SizeClass::Boss => 10.0,
        }
    }

    /// Base sprite scale before power scaling.
    pub fn base_scale(self) -> f64 {
        match self {
            SizeClass::Normal => 1.0,
            SizeClass::Reinforced => 1.25,
            SizeClass::Boss => 1.6,
        }
    }
}

/// Enemy lifecycle. `Defeated` and `Arrived` are terminal: the entity is
/// tombstoned and despawned by the cleanup system at the end of the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Traveling,
    Defeated,
    Arrived,
}

/// Wave lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// No wave running; a new one may be started.
    #[default]
    Idle,
    /// Roster spawn events still pending.
    Spawning,
    /// Roster fully spawned, enemies still alive.
    Active,
    /// Everything spawned and cleared. Returns to `Idle` on the next tick.
    Complete,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Lobby,
    Active,
    Paused,
    GameOver,
}

/// How a tower chooses among enemies in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPriority {
    /// Earliest-spawned enemy in range.
    #[default]
    First,
    /// Enemy in range furthest along the path (nearest to the base).
    Leading,
}

/// Shop upgrade axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeAxis {
    Damage,
    Range,
    AttackSpeed,
    Currency,
}

/// Faction strength bucket derived from power rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PowerTier {
    /// Below 1.
    Micro,
    /// Below 10.
    Minor,
    /// Below 100.
    Regional,
    /// Below 1000.
    Major,
    /// Below 10000.
    Great,
    /// 10000 and up.
    Super,
}

impl PowerTier {
    pub const ALL: [PowerTier; 6] = [
        PowerTier::Micro,
        PowerTier::Minor,
        PowerTier::Regional,
        PowerTier::Major,
        PowerTier::Great,
        PowerTier::Super,
    ];

    pub fn of(power_rating: f64) -> Self {
        match power_rating {
            p if p < 1.0 => PowerTier::Micro,
            p if p < 10.0 => PowerTier::Minor,
            p if p < 100.0 => PowerTier::Regional,
            p if p < 1_000.0 => PowerTier::Major,
            p if p < 10_000.0 => PowerTier::Great,
            _ => PowerTier::Super,
        }
    }
}

/// Why a placement request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRejection {
    /// Position lies within the path tolerance.
    OnPath,
    /// Not enough currency.
    Unaffordable,
    /// Non-finite coordinates.
    InvalidPosition,
    /// Game is not accepting placements (lobby or game over).
    NotActive,
}
