//! Wave spawning system: schedules a roster across the wave duration and
//! releases each spawn when its due time passes.

use std::collections::VecDeque;

use hecs::World;
use tracing::{info, warn};

use flagline_core::enums::{SizeClass, WavePhase};
use flagline_core::events::{GameEvent, WaveSummary};
use flagline_core::factions::FactionCatalog;
use flagline_core::path::PathGeometry;
use flagline_procgen::WaveRoster;

/// One scheduled enemy spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSpawn {
    /// Simulation time at which the enemy enters the path.
    pub due_at: f64,
    pub faction_id: String,
    pub size: SizeClass,
}

/// The running wave and its spawn queue.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// 1-based index of the current (or last) wave; 0 before the first.
    pub index: u32,
    pub phase: WavePhase,
    pub started_at: f64,
    pub roster_size: u32,
    pub spawned: u32,
    pub defeated: u32,
    pub arrived: u32,
    pub factions: Vec<String>,
    /// Ordered by `due_at`.
    pub pending: VecDeque<PendingSpawn>,
}

impl WaveState {
    /// A wave is running from its start until it completes.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, WavePhase::Spawning | WavePhase::Active)
    }

    /// Open wave `roster.wave` at `now`, spacing spawns evenly over `duration`.
    pub fn schedule(&mut self, roster: &WaveRoster, now: f64, duration: f64) {
        let len = roster.len();
        let spacing = if len > 0 { duration / len as f64 } else { 0.0 };

        self.index = roster.wave;
        self.phase = WavePhase::Spawning;
        self.started_at = now;
        self.roster_size = len as u32;
        self.spawned = 0;
        self.defeated = 0;
        self.arrived = 0;
        self.factions = roster.faction_ids();
        self.pending = roster
            .iter()
            .enumerate()
            .map(|(i, entry)| PendingSpawn {
                due_at: now + i as f64 * spacing,
                faction_id: entry.faction_id.clone(),
                size: entry.size,
            })
            .collect();
    }

    /// Drop every pending spawn. Returns how many were cancelled.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn summary(&self, forced: bool) -> WaveSummary {
        WaveSummary {
            wave_index: self.index,
            roster_size: self.roster_size,
            spawned: self.spawned,
            defeated: self.defeated,
            arrived: self.arrived,
            factions: self.factions.clone(),
            forced,
        }
    }
}

/// Wave bookkeeping at the top of a tick: a completed wave returns to idle.
pub fn advance_phase(wave: &mut WaveState) {
    if wave.phase == WavePhase::Complete {
        wave.phase = WavePhase::Idle;
    }
}

/// Spawn every pending enemy whose due time has passed.
pub fn run(
    world: &mut World,
    wave: &mut WaveState,
    catalog: &FactionCatalog,
    path: &PathGeometry,
    now: f64,
    next_spawn_seq: &mut u64,
    events: &mut Vec<GameEvent>,
) {
    if wave.phase != WavePhase::Spawning {
        return;
    }

    while wave.pending.front().is_some_and(|s| s.due_at <= now) {
        let Some(spawn) = wave.pending.pop_front() else {
            break;
        };
        crate::world_setup::spawn_enemy(
            world,
            catalog,
            path,
            &spawn.faction_id,
            spawn.size,
            wave.index,
            *next_spawn_seq,
        );
        *next_spawn_seq += 1;
        wave.spawned += 1;
        events.push(GameEvent::EnemySpawned {
            faction_id: spawn.faction_id,
            size: spawn.size,
        });
    }

    if wave.pending.is_empty() {
        wave.phase = WavePhase::Active;
    }
}

/// Close the wave when it is cleared, or force it closed once spawning
/// overruns `duration + grace`.
///
/// The timeout only guards the spawn schedule. Due times all fall inside
/// `duration`, so it fires only if the queue is fed from outside the
/// scheduler. An `Active` wave closes only when its enemies are gone, however
/// long that takes.
pub fn check_completion(
    wave: &mut WaveState,
    live_enemies: usize,
    now: f64,
    duration: f64,
    grace: f64,
    events: &mut Vec<GameEvent>,
) {
    match wave.phase {
        WavePhase::Spawning if now >= wave.started_at + duration + grace => {
            let cancelled = wave.cancel_pending();
            warn!(
                wave = wave.index,
                cancelled,
                live_enemies,
                "wave overran its schedule; force-closing"
            );
            wave.phase = WavePhase::Complete;
            events.push(GameEvent::WaveComplete(wave.summary(true)));
        }
        WavePhase::Active if live_enemies == 0 => {
            info!(
                wave = wave.index,
                defeated = wave.defeated,
                arrived = wave.arrived,
                "wave complete"
            );
            wave.phase = WavePhase::Complete;
            events.push(GameEvent::WaveComplete(wave.summary(false)));
        }
        _ => {}
    }
}
