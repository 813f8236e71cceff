//! Player economy: currency, lives, shield and upgrade state.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

use std::collections::BTreeSet;

use flagline_core::types::{GlobalModifiers, UpgradeCounts};

/// Running economy tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct Economy {
    pub currency: u32,
    pub lives: u32,
    /// Arrivals cost no lives before this simulation time.
    pub shield_until: Option<f64>,
    pub modifiers: GlobalModifiers,
    pub upgrades: UpgradeCounts,
    pub owned_factions: BTreeSet<String>,
}

impl Economy {
    pub fn new(currency: u32, lives: u32) -> Self {
        Self {
            currency,
            lives,
            ..Default::default()
        }
    }

    pub fn shield_active(&self, now: f64) -> bool {
        self.shield_until.is_some_and(|until| now < until)
    }

    /// Extend the shield to `until` if that is later than the current expiry.
    pub fn raise_shield(&mut self, until: f64) {
        self.shield_until = Some(self.shield_until.map_or(until, |u| u.max(until)));
    }

    /// Credit `base` scaled by the currency multiplier. Returns the amount credited.
    pub fn earn(&mut self, base: u32) -> u32 {
        let multiplier = self.modifiers.sanitized().currency;
        let amount = (base as f64 * multiplier).floor() as u32;
        self.currency = self.currency.saturating_add(amount);
        amount
    }

    /// Deduct `cost` if affordable.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.currency.checked_sub(cost) {
            Some(rest) => {
                self.currency = rest;
                true
            }
            None => false,
        }
    }

    /// Signed adjustment, saturating at zero and `u32::MAX`.
    pub fn adjust(&mut self, delta: i64) {
        let next = (self.currency as i64).saturating_add(delta);
        self.currency = next.clamp(0, u32::MAX as i64) as u32;
    }

    /// Handle one arrival. Returns whether a life was lost.
    pub fn register_arrival(&mut self, now: f64) -> bool {
        if self.shield_active(now) || self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        true
    }

    /// Replace the global multipliers.
    pub fn set_modifiers(&mut self, modifiers: GlobalModifiers) {
        self.modifiers = modifiers.sanitized();
    }

    /// Re-derive the multipliers from the upgrade counts.
    pub fn apply_upgrades(&mut self) {
        self.modifiers = GlobalModifiers::from_upgrades(&self.upgrades);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagline_core::enums::UpgradeAxis;

    #[test]
    fn test_spend_and_adjust() {
        let mut economy = Economy::new(100, 5);
        assert!(economy.spend(60));
        assert!(!economy.spend(60));
        assert_eq!(economy.currency, 40);
        economy.adjust(-100);
        assert_eq!(economy.currency, 0);
        economy.adjust(25);
        assert_eq!(economy.currency, 25);
    }

    #[test]
    fn test_earn_applies_currency_multiplier() {
        let mut economy = Economy::new(0, 5);
        economy.upgrades.record(UpgradeAxis::Currency);
        economy.upgrades.record(UpgradeAxis::Currency);
        economy.apply_upgrades();
        assert_eq!(economy.earn(10), 12);
        assert_eq!(economy.currency, 12);
    }

    #[test]
    fn test_shield_blocks_life_loss() {
        let mut economy = Economy::new(0, 3);
        economy.raise_shield(5.0);
        economy.raise_shield(2.0);
        assert_eq!(economy.shield_until, Some(5.0));
        assert!(!economy.register_arrival(4.9));
        assert_eq!(economy.lives, 3);
        assert!(economy.register_arrival(5.0));
        assert_eq!(economy.lives, 2);
    }
}
