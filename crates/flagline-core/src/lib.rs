//! Core types and definitions for the FLAGLINE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, the faction
//! catalog, path geometry and stat derivation.
//! It has no dependency on the ECS or any runtime framework.

pub mod abilities;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod factions;
pub mod path;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
