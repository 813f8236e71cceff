//! Effect composition in a fixed, reproducible order.
//!
//! Pure function of its inputs plus the supplied RNG. Never panics on
//! malformed input; the worst case is the identity outcome.

use glam::DVec2;
use rand::Rng;

use flagline_core::abilities::Effect;
use flagline_core::constants::{PIERCE_ANGLE_TOLERANCE, SPLASH_RADIUS};
use flagline_core::factions::FactionCatalog;

/// What the engine needs to know about one live enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target<H> {
    pub handle: H,
    pub position: DVec2,
    /// Kill reward, used by money effects.
    pub reward: u32,
}

/// The attack being resolved.
#[derive(Debug, Clone, Copy)]
pub struct AttackContext<'a> {
    pub attacker_faction: &'a str,
    pub base_damage: f64,
    /// Reference point for pierce bearings (the firing tower).
    pub origin: DVec2,
    /// Current simulation time, for slow and shield expiries.
    pub now: f64,
}

/// Speed change to apply to every affected enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlowOutcome {
    pub multiplier: f64,
    pub expires_at: f64,
}

/// Result of one attack resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityOutcome<H> {
    /// Never empty; the primary target comes first. No duplicates.
    pub affected: Vec<H>,
    /// Damage dealt to each affected enemy.
    pub total_damage: f64,
    /// Human-readable tags, in resolution order.
    pub side_effects: Vec<String>,
    pub slow: Option<SlowOutcome>,
    pub bonus_currency: u32,
    pub shield_until: Option<f64>,
}

impl<H: Copy> AbilityOutcome<H> {
    /// Base damage to the primary target only, no side effects.
    pub fn identity(primary: H, base_damage: f64) -> Self {
        Self {
            affected: vec![primary],
            total_damage: base_damage,
            side_effects: Vec::new(),
            slow: None,
            bonus_currency: 0,
            shield_until: None,
        }
    }
}

/// Resolve one attack by `ctx.attacker_faction` against `primary`.
///
/// `enemies` is the live roster in iteration order; it normally contains
/// `primary` but the engine copes if it does not. `on_bonus_currency` is
/// invoked once per money effect that yields a positive amount.
pub fn resolve_attack<H, R>(
    catalog: &FactionCatalog,
    ctx: &AttackContext<'_>,
    primary: &Target<H>,
    enemies: &[Target<H>],
    rng: &mut R,
    mut on_bonus_currency: Option<&mut dyn FnMut(u32)>,
) -> AbilityOutcome<H>
where
    H: Copy + PartialEq,
    R: Rng + ?Sized,
{
    let base_damage = if ctx.base_damage.is_finite() && ctx.base_damage > 0.0 {
        ctx.base_damage
    } else {
        0.0
    };
    let mut outcome = AbilityOutcome::identity(primary.handle, base_damage);

    let mut effects: Vec<&Effect> = catalog.abilities_of(ctx.attacker_faction).iter().collect();
    if effects.is_empty() {
        return outcome;
    }
    // Stable: effects of the same stage keep their declared order.
    effects.sort_by_key(|e| e.stage());

    for effect in effects {
        match *effect {
            Effect::Damage { multiplier } => {
                if let Some(m) = valid_multiplier(multiplier) {
                    outcome.total_damage *= m;
                    outcome.side_effects.push(format!("damage x{m}"));
                }
            }
            Effect::Critical { chance, multiplier } => {
                let chance = if chance.is_finite() { chance.clamp(0.0, 1.0) } else { 0.0 };
                // Roll unconditionally so the RNG stream does not depend on the chance value.
                let roll: f64 = rng.gen();
                if roll < chance {
                    if let Some(m) = valid_multiplier(multiplier) {
                        outcome.total_damage *= m;
                        outcome.side_effects.push("critical".to_string());
                    }
                }
            }
            Effect::Splash { multiplier } => {
                for enemy in enemies {
                    if enemy.position.distance(primary.position) <= SPLASH_RADIUS {
                        push_unique(&mut outcome.affected, enemy.handle);
                    }
                }
                if let Some(m) = valid_multiplier(multiplier) {
                    outcome.total_damage *= m;
                }
                outcome.side_effects.push("splash".to_string());
            }
            Effect::Multi { targets } => {
                let wanted = targets as usize;
                for enemy in enemies {
                    if outcome.affected.len() >= wanted {
                        break;
                    }
                    push_unique(&mut outcome.affected, enemy.handle);
                }
                outcome.side_effects.push(format!("multi x{targets}"));
            }
            Effect::Pierce { extra } => {
                let added = pierce(&mut outcome.affected, ctx.origin, primary, enemies, extra);
                if added > 0 {
                    outcome.side_effects.push(format!("pierce +{added}"));
                }
            }
            Effect::Slow {
                multiplier,
                duration,
            } => {
                if !multiplier.is_finite() || !duration.is_finite() || duration <= 0.0 {
                    continue;
                }
                let candidate = SlowOutcome {
                    multiplier,
                    expires_at: ctx.now + duration,
                };
                // The strongest slow of one attack wins.
                outcome.slow = match outcome.slow {
                    Some(existing) if existing.multiplier <= candidate.multiplier => Some(existing),
                    _ => Some(candidate),
                };
                let label = if multiplier < 0.0 {
                    "knockback"
                } else if multiplier == 0.0 {
                    "stop"
                } else {
                    "slow"
                };
                outcome.side_effects.push(label.to_string());
            }
            Effect::Money { multiplier } => {
                let amount = money_amount(primary.reward, multiplier);
                grant(&mut outcome, amount, &mut on_bonus_currency);
            }
            Effect::Casino {
                min_multiplier,
                max_multiplier,
            } => {
                let multiplier = if min_multiplier.is_finite()
                    && max_multiplier.is_finite()
                    && min_multiplier < max_multiplier
                {
                    rng.gen_range(min_multiplier..=max_multiplier)
                } else {
                    min_multiplier
                };
                let amount = money_amount(primary.reward, multiplier);
                grant(&mut outcome, amount, &mut on_bonus_currency);
            }
            Effect::Shield { duration } => {
                if duration.is_finite() && duration > 0.0 {
                    let until = ctx.now + duration;
                    outcome.shield_until = Some(outcome.shield_until.map_or(until, |u| u.max(until)));
                    outcome.side_effects.push("shield".to_string());
                }
            }
        }
    }

    outcome.total_damage = outcome.total_damage.max(0.0);
    outcome
}

fn valid_multiplier(multiplier: f64) -> Option<f64> {
    (multiplier.is_finite() && multiplier >= 0.0).then_some(multiplier)
}

fn push_unique<H: PartialEq>(affected: &mut Vec<H>, handle: H) {
    if !affected.contains(&handle) {
        affected.push(handle);
    }
}

fn money_amount(reward: u32, multiplier: f64) -> u32 {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return 0;
    }
    (reward as f64 * multiplier).floor() as u32
}

fn grant<H>(
    outcome: &mut AbilityOutcome<H>,
    amount: u32,
    on_bonus_currency: &mut Option<&mut dyn FnMut(u32)>,
) {
    if amount == 0 {
        return;
    }
    outcome.bonus_currency += amount;
    outcome.side_effects.push(format!("+{amount}"));
    if let Some(callback) = on_bonus_currency.as_deref_mut() {
        callback(amount);
    }
}

/// Add up to `extra` enemies on the primary's bearing from `origin`.
/// Returns how many were added.
fn pierce<H: Copy + PartialEq>(
    affected: &mut Vec<H>,
    origin: DVec2,
    primary: &Target<H>,
    enemies: &[Target<H>],
    extra: u32,
) -> u32 {
    let to_primary = primary.position - origin;
    if to_primary.length_squared() == 0.0 {
        return 0;
    }
    let bearing = to_primary.y.atan2(to_primary.x);

    let mut added = 0;
    for enemy in enemies {
        if added >= extra {
            break;
        }
        if enemy.handle == primary.handle || affected.contains(&enemy.handle) {
            continue;
        }
        let offset = enemy.position - origin;
        if offset.length_squared() == 0.0 {
            continue;
        }
        if angle_between(bearing, offset.y.atan2(offset.x)) <= PIERCE_ANGLE_TOLERANCE {
            affected.push(enemy.handle);
            added += 1;
        }
    }
    added
}

/// Absolute angular difference in `[0, PI]`.
fn angle_between(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(std::f64::consts::TAU);
    diff.min(std::f64::consts::TAU - diff)
}
