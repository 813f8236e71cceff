//! Procedural wave generation for FLAGLINE.
//!
//! Picks each wave's enemy roster from the faction catalog: a power window
//! that widens with the wave number, a roster size that grows with it, and
//! deterministic size-class assignment. All randomness comes from the caller's
//! RNG so the same seed always yields the same rosters.

pub mod roster;

pub use flagline_core as core;
pub use roster::{
    generate_roster, power_window, roster_size, size_class_for, PowerWindow, RosterEntry,
    WaveRoster,
};
