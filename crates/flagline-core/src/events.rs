//! Events emitted by the simulation for UI, audio and economy collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Roster summary reported when a wave closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSummary {
    pub wave_index: u32,
    pub roster_size: u32,
    pub spawned: u32,
    pub defeated: u32,
    pub arrived: u32,
    /// Distinct faction ids in the roster, weakest first.
    pub factions: Vec<String>,
    /// True when the wave was closed by the overrun timeout.
    pub forced: bool,
}

/// Everything collaborators may react to, drained once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WaveStarted {
        wave_index: u32,
        roster_size: u32,
    },
    EnemySpawned {
        faction_id: String,
        size: SizeClass,
    },
    EnemyDefeated {
        faction_id: String,
        reward: u32,
    },
    EnemyArrived {
        faction_id: String,
        /// False when a shield absorbed the arrival.
        life_lost: bool,
        lives_remaining: u32,
    },
    /// Ability side effects of one attack, for floating-text feedback.
    AbilityTriggered {
        faction_id: String,
        labels: Vec<String>,
    },
    BonusCurrency {
        faction_id: String,
        amount: u32,
    },
    WaveComplete(WaveSummary),
    TowerPlaced {
        faction_id: String,
        x: f64,
        y: f64,
    },
    TowerRemoved {
        faction_id: String,
        x: f64,
        y: f64,
        expired: bool,
    },
    PlacementRejected {
        faction_id: String,
        reason: PlacementRejection,
    },
    GameOver {
        wave_index: u32,
    },
}
