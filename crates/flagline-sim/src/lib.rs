//! Simulation engine for FLAGLINE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces FrameSnapshots for the host.

pub mod config;
pub mod economy;
pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use flagline_core as core;
pub use session::{SessionError, SessionSnapshot};
