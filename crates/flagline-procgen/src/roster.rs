//! Wave rosters: which factions march, how many, and how big.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use flagline_core::constants::{
    BOSS_WAVE_INTERVAL, MAX_ROSTER_SIZE, REINFORCED_ROSTER_STRIDE, REINFORCED_WAVE_INTERVAL,
    ROSTER_BASE_SIZE, ROSTER_GROWTH_PER_WAVE,
};
use flagline_core::enums::SizeClass;
use flagline_core::factions::{Faction, FactionCatalog};

/// Inclusive power-rating range eligible for a wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerWindow {
    pub min: f64,
    pub max: f64,
}

impl PowerWindow {
    pub const UNBOUNDED: PowerWindow = PowerWindow {
        min: 0.0,
        max: f64::INFINITY,
    };

    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, power_rating: f64) -> bool {
        power_rating >= self.min && power_rating <= self.max
    }
}

/// `(last wave of band, window)`, ascending. Waves past the last band are unbounded.
const WINDOW_BANDS: [(u32, PowerWindow); 8] = [
    (3, PowerWindow::new(0.0, 5.0)),
    (6, PowerWindow::new(0.0, 20.0)),
    (10, PowerWindow::new(0.0, 60.0)),
    (15, PowerWindow::new(1.0, 150.0)),
    (20, PowerWindow::new(5.0, 400.0)),
    (30, PowerWindow::new(10.0, 1_000.0)),
    (40, PowerWindow::new(30.0, 3_000.0)),
    (50, PowerWindow::new(100.0, 10_000.0)),
];

/// Eligible power range for wave `wave` (1-based; 0 is treated as 1).
pub fn power_window(wave: u32) -> PowerWindow {
    let wave = wave.max(1);
    WINDOW_BANDS
        .iter()
        .find(|(last, _)| wave <= *last)
        .map(|(_, window)| *window)
        .unwrap_or(PowerWindow::UNBOUNDED)
}

/// `min(30, floor(wave * 1.5) + 3)`.
pub fn roster_size(wave: u32) -> usize {
    let grown = (wave as f64 * ROSTER_GROWTH_PER_WAVE).floor() as usize + ROSTER_BASE_SIZE;
    grown.min(MAX_ROSTER_SIZE)
}

/// Size class of the entry at `position` in a roster of `len` for `wave`.
///
/// Boss waves put a boss in the last slot; reinforced waves upgrade every
/// stride-th slot. A boss slot is never also reinforced.
pub fn size_class_for(wave: u32, position: usize, len: usize) -> SizeClass {
    if len == 0 || position >= len || wave == 0 {
        return SizeClass::Normal;
    }
    if wave % BOSS_WAVE_INTERVAL == 0 && position == len - 1 {
        return SizeClass::Boss;
    }
    if wave % REINFORCED_WAVE_INTERVAL == 0 && (position + 1) % REINFORCED_ROSTER_STRIDE == 0 {
        return SizeClass::Reinforced;
    }
    SizeClass::Normal
}

/// One enemy slot in a wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub faction_id: String,
    pub power: f64,
    pub size: SizeClass,
}

/// A wave's spawn order, weakest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveRoster {
    pub wave: u32,
    pub window: PowerWindow,
    pub entries: Vec<RosterEntry>,
}

impl WaveRoster {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Distinct faction ids in roster order.
    pub fn faction_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !ids.contains(&entry.faction_id) {
                ids.push(entry.faction_id.clone());
            }
        }
        ids
    }
}

/// Generate the roster for `wave`.
///
/// Each slot prefers factions not yet `seen` this session and not already
/// drawn for this wave, then any faction not drawn for this wave, then the
/// whole eligible pool. An empty window falls back to the full catalog. The
/// caller owns `seen` and records the roster's factions afterwards.
pub fn generate_roster<R: Rng + ?Sized>(
    wave: u32,
    catalog: &FactionCatalog,
    seen: &HashSet<String>,
    rng: &mut R,
) -> WaveRoster {
    let window = power_window(wave);
    let mut pool: Vec<&Faction> = catalog.within_power(window.min, window.max).collect();
    if pool.is_empty() {
        pool = catalog.sorted_by_power().collect();
    }

    let size = roster_size(wave);
    let mut drawn: HashSet<&str> = HashSet::with_capacity(size);
    let mut entries = Vec::with_capacity(size);

    for _ in 0..size {
        let fresh: Vec<&Faction> = pool
            .iter()
            .copied()
            .filter(|f| !seen.contains(&f.id) && !drawn.contains(f.id.as_str()))
            .collect();
        let undrawn: Vec<&Faction> = pool
            .iter()
            .copied()
            .filter(|f| !drawn.contains(f.id.as_str()))
            .collect();

        let candidates = if !fresh.is_empty() {
            &fresh
        } else if !undrawn.is_empty() {
            &undrawn
        } else {
            &pool
        };
        let Some(&faction) = candidates.choose(rng) else {
            break;
        };

        drawn.insert(faction.id.as_str());
        entries.push(RosterEntry {
            faction_id: faction.id.clone(),
            power: faction.power_rating,
            size: SizeClass::Normal,
        });
    }

    // Stable: equal ratings keep their draw order.
    entries.sort_by(|a, b| a.power.total_cmp(&b.power));
    let len = entries.len();
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.size = size_class_for(wave, position, len);
    }

    WaveRoster {
        wave,
        window,
        entries,
    }
}
