//! Game settings and preferences
//!
//! Stored as JSON, separate from any level state.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;
use crate::error::SettingsError;
use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty used for new games
    pub difficulty: Difficulty,

    // === Audio ===
    /// Background music on/off (read by the audio layer only)
    pub sound: bool,

    // === Timing ===
    /// Real-time length of one simulation tick
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            sound: true,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::InvalidTickInterval(self.tick_interval_ms));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::info!("Using default settings ({})", err);
                Self::default()
            }
        }
    }
}
