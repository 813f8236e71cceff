//! Frame snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{GlobalModifiers, Position, SimTime};

/// Complete render/UI state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub currency: u32,
    pub lives: u32,
    pub shield_active: bool,
    pub modifiers: GlobalModifiers,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub events: Vec<GameEvent>,
}

/// Wave progress for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub index: u32,
    pub phase: WavePhase,
    pub roster_size: u32,
    pub spawned: u32,
    pub pending: u32,
}

/// A live enemy for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub faction_id: String,
    pub position: Position,
    pub heading: f64,
    /// current / max hit points.
    pub health_ratio: f64,
    pub size: SizeClass,
    pub scale: f64,
    pub slowed: bool,
}

/// A placed tower for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u64,
    pub faction_id: String,
    pub position: Position,
    pub range: f64,
    /// 0.0 just fired, 1.0 ready.
    pub cooldown_phase: f64,
    pub placed_at_wave: u32,
}
