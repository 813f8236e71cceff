//! Session persistence data.
//!
//! The engine only converts to and from this value; writing it anywhere is
//! the host's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flagline_core::types::UpgradeCounts;

use crate::config::ConfigError;

/// Current session format version.
pub const SESSION_VERSION: u32 = 1;

/// Session restore failure. A failed restore changes nothing.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("malformed session data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported session version {0}")]
    UnsupportedVersion(u32),
    #[error("saved tower {0} is invalid")]
    InvalidTower(usize),
    #[error("session has no lives remaining")]
    NoLives,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A placed tower as saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTower {
    pub x: f64,
    pub y: f64,
    pub faction_id: String,
    pub placed_at_wave: u32,
}

/// Everything needed to resume a session between waves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub seed: u64,
    /// Last wave started.
    pub wave_index: u32,
    pub currency: u32,
    pub lives: u32,
    pub towers: Vec<SavedTower>,
    pub owned_factions: Vec<String>,
    pub upgrades: UpgradeCounts,
}

impl SessionSnapshot {
    /// Parse and validate. Any missing field or invalid value rejects the whole session.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let session: SessionSnapshot = serde_json::from_str(json)?;
        session.validate()?;
        Ok(session)
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.version != SESSION_VERSION {
            return Err(SessionError::UnsupportedVersion(self.version));
        }
        if self.lives == 0 {
            return Err(SessionError::NoLives);
        }
        for (i, tower) in self.towers.iter().enumerate() {
            let valid = tower.x.is_finite()
                && tower.y.is_finite()
                && !tower.faction_id.is_empty()
                && tower.placed_at_wave <= self.wave_index;
            if !valid {
                return Err(SessionError::InvalidTower(i));
            }
        }
        Ok(())
    }
}
