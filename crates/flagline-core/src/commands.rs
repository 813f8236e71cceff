//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GlobalModifiers;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Leave the lobby and start playing.
    StartGame,
    Pause,
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },

    // --- Waves ---
    /// Start the next wave if none is running.
    StartWave,

    // --- Towers ---
    /// Place a tower. `cost` is priced by the economy layer.
    PlaceTower {
        faction_id: String,
        x: f64,
        y: f64,
        cost: u32,
    },
    /// Remove the tower nearest to `(x, y)` within the pick radius.
    RemoveTower { x: f64, y: f64 },

    // --- Shop / collection ---
    /// Replace the global multipliers.
    SetModifiers { modifiers: GlobalModifiers },
    /// Record one upgrade purchase and refresh the global multipliers.
    RecordUpgrade { axis: UpgradeAxis },
    /// Add a faction to the owned collection.
    GrantFaction { faction_id: String },
    /// Adjust currency by a signed amount (shop purchases, refunds).
    AdjustCurrency { delta: i64 },
}
