//! Ability resolution for FLAGLINE.
//!
//! Turns a tower's base attack into a final damage/side-effect outcome by
//! interpreting the attacker's declarative effect list.
//! No ECS dependency: targets are plain data keyed by a caller-chosen handle.

pub mod resolve;

pub use flagline_core as core;
pub use resolve::{resolve_attack, AbilityOutcome, AttackContext, SlowOutcome, Target};

#[cfg(test)]
mod tests;
