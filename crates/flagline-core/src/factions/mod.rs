//! Faction catalog: the static table every derived stat keys off.
//!
//! Built once per session and never mutated. Derived views (power-sorted
//! order, tier buckets) are computed at construction.

mod table;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::abilities::{Effect, TowerModifiers};
use crate::constants::FALLBACK_POWER_RATING;
use crate::enums::PowerTier;

pub use table::CASINO_FACTION_ID;

/// A playable/enemy identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: String,
    pub display_name: String,
    /// Economic-strength proxy. Always positive.
    pub power_rating: f64,
    /// Banding colors as 0xRRGGBB, in flag order.
    pub palette: Vec<u32>,
    pub flag: String,
    pub abilities: Vec<Effect>,
    pub tower_modifiers: TowerModifiers,
}

impl Faction {
    /// A faction with no abilities and neutral tower modifiers.
    ///
    /// A non-finite or non-positive rating is replaced by the fallback rating.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, power_rating: f64) -> Self {
        let id = id.into();
        let flag = flag_glyph(&id);
        Self {
            id,
            display_name: display_name.into(),
            power_rating: sanitize_power(power_rating),
            palette: Vec::new(),
            flag,
            abilities: Vec::new(),
            tower_modifiers: TowerModifiers::NEUTRAL,
        }
    }

    pub fn with_palette(mut self, palette: &[u32]) -> Self {
        self.palette = palette.to_vec();
        self
    }

    pub fn with_abilities(mut self, abilities: &[Effect]) -> Self {
        self.abilities = abilities.to_vec();
        self
    }

    pub fn with_tower_modifiers(mut self, modifiers: TowerModifiers) -> Self {
        self.tower_modifiers = modifiers;
        self
    }

    pub fn tier(&self) -> PowerTier {
        PowerTier::of(self.power_rating)
    }
}

/// Lookup table of factions plus derived orderings.
#[derive(Debug, Clone)]
pub struct FactionCatalog {
    factions: Vec<Faction>,
    index: HashMap<String, usize>,
    by_power: Vec<usize>,
    tiers: BTreeMap<PowerTier, Vec<usize>>,
}

impl FactionCatalog {
    /// Build a catalog from an explicit list. Later duplicates of an id are dropped.
    pub fn from_factions(factions: Vec<Faction>) -> Self {
        let mut unique = Vec::with_capacity(factions.len());
        let mut index = HashMap::with_capacity(factions.len());
        for faction in factions {
            if index.contains_key(&faction.id) {
                continue;
            }
            index.insert(faction.id.clone(), unique.len());
            unique.push(faction);
        }

        let mut by_power: Vec<usize> = (0..unique.len()).collect();
        by_power.sort_by(|&a, &b| unique[a].power_rating.total_cmp(&unique[b].power_rating));

        let mut tiers: BTreeMap<PowerTier, Vec<usize>> = BTreeMap::new();
        for &i in &by_power {
            tiers.entry(unique[i].tier()).or_default().push(i);
        }

        Self {
            factions: unique,
            index,
            by_power,
            tiers,
        }
    }

    /// The built-in world table.
    pub fn builtin() -> Self {
        Self::from_factions(table::builtin_factions())
    }

    pub fn len(&self) -> usize {
        self.factions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }

    /// Factions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Faction> {
        self.factions.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Faction> {
        self.index.get(id).map(|&i| &self.factions[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Power rating for `id`, or the fallback rating for unknown ids.
    pub fn power_of(&self, id: &str) -> f64 {
        self.get(id)
            .map(|f| f.power_rating)
            .unwrap_or(FALLBACK_POWER_RATING)
    }

    /// Declared per-attack effects. Empty for unknown ids.
    pub fn abilities_of(&self, id: &str) -> &[Effect] {
        self.get(id).map(|f| f.abilities.as_slice()).unwrap_or(&[])
    }

    /// Tower-level modifiers. Neutral for unknown ids.
    pub fn tower_modifiers_of(&self, id: &str) -> TowerModifiers {
        self.get(id)
            .map(|f| f.tower_modifiers)
            .unwrap_or(TowerModifiers::NEUTRAL)
    }

    /// Factions sorted ascending by power rating.
    pub fn sorted_by_power(&self) -> impl Iterator<Item = &Faction> {
        self.by_power.iter().map(|&i| &self.factions[i])
    }

    /// Factions in `tier`, ascending by power rating.
    pub fn tier(&self, tier: PowerTier) -> impl Iterator<Item = &Faction> {
        self.tiers
            .get(&tier)
            .into_iter()
            .flatten()
            .map(|&i| &self.factions[i])
    }

    /// Factions whose rating lies in `[min, max]`, ascending by power.
    pub fn within_power(&self, min: f64, max: f64) -> impl Iterator<Item = &Faction> {
        self.sorted_by_power()
            .filter(move |f| f.power_rating >= min && f.power_rating <= max)
    }
}

impl Default for FactionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn sanitize_power(power_rating: f64) -> f64 {
    if power_rating.is_finite() && power_rating > 0.0 {
        power_rating
    } else {
        FALLBACK_POWER_RATING
    }
}

/// Regional-indicator flag for two-letter ids, white flag otherwise.
fn flag_glyph(id: &str) -> String {
    let letters: Vec<char> = id.chars().collect();
    if letters.len() != 2 || !letters.iter().all(|c| c.is_ascii_alphabetic()) {
        return "\u{1F3F3}".to_string();
    }
    letters
        .iter()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}
