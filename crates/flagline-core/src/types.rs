//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in playfield space (pixels). x = right, y = down.
pub type Position = glam::DVec2;

/// Sprite heading in radians, measured like `atan2(dy, dx)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds. This is the monotonic clock that
    /// cooldowns, slows and shields are compared against.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick of `dt_secs` simulated seconds.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

/// Global multipliers owned by the shop/upgrade layer.
///
/// Read-only to the simulation: applied at stat-derivation and
/// reward-computation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalModifiers {
    pub damage: f64,
    pub range: f64,
    pub attack_speed: f64,
    pub currency: f64,
}

impl Default for GlobalModifiers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            range: 1.0,
            attack_speed: 1.0,
            currency: 1.0,
        }
    }
}

impl GlobalModifiers {
    /// Multipliers implied by cumulative upgrade purchases.
    pub fn from_upgrades(upgrades: &UpgradeCounts) -> Self {
        let step = crate::constants::UPGRADE_STEP;
        Self {
            damage: 1.0 + upgrades.damage as f64 * step,
            range: 1.0 + upgrades.range as f64 * step,
            attack_speed: 1.0 + upgrades.attack_speed as f64 * step,
            currency: 1.0 + upgrades.currency as f64 * step,
        }
    }

    /// Replace non-finite or non-positive multipliers with 1.0.
    pub fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        Self {
            damage: fix(self.damage),
            range: fix(self.range),
            attack_speed: fix(self.attack_speed),
            currency: fix(self.currency),
        }
    }
}

/// Cumulative upgrade purchase counts, one per shop axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeCounts {
    pub damage: u32,
    pub range: u32,
    pub attack_speed: u32,
    pub currency: u32,
}

impl UpgradeCounts {
    pub fn record(&mut self, axis: crate::enums::UpgradeAxis) {
        use crate::enums::UpgradeAxis;
        match axis {
            UpgradeAxis::Damage => self.damage += 1,
            UpgradeAxis::Range => self.range += 1,
            UpgradeAxis::AttackSpeed => self.attack_speed += 1,
            UpgradeAxis::Currency => self.currency += 1,
        }
    }
}
