//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks an entity as an enemy unit walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub faction_id: String,
    pub size: SizeClass,
    /// Currency granted on defeat, before the global currency multiplier.
    pub reward: u32,
    /// Monotonic spawn counter. Orders "first" targeting.
    pub spawn_seq: u64,
    pub state: EnemyState,
}

/// Hit points. Invariant: `0 <= current <= max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Arc-length progress along the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathProgress {
    pub distance: f64,
    /// Base speed in pixels per second.
    pub speed: f64,
}

/// Temporary speed change from slow/stop/knock-back effects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedModifier {
    pub multiplier: f64,
    /// Simulation time (seconds) at which the modifier lapses.
    pub expires_at: f64,
}

impl Default for SpeedModifier {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            expires_at: 0.0,
        }
    }
}

/// Sprite scale for rendering and hit-testing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VisualScale(pub f64);

/// Marks an entity as a player-placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub faction_id: String,
    pub placed_at_wave: u32,
    /// Simulation time of the last attack, if any.
    pub last_fired_at: Option<f64>,
    /// Seconds between attacks.
    pub attack_interval: f64,
    /// Monotonic placement counter. Orders the combat pass.
    pub placement_seq: u64,
}

/// Derived tower combat stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TowerStats {
    pub range: f64,
    pub damage: f64,
}

// Position and Heading are defined in types.rs and used as components.
