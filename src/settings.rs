//! Player settings and preferences
//!
//! Kept separate from [`Tuning`](crate::Tuning): these never change how the
//! simulation plays, only how the frontend drives and presents it.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Start muted
    pub muted: bool,

    // === Input ===
    /// Steer with device tilt when available
    pub tilt_enabled: bool,

    // === Demo ===
    /// Let the autopilot play (attract mode / headless runs)
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.3,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            tilt_enabled: true,
            autopilot: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse settings, falling back to defaults on bad input
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Apply input preferences to a frame's raw input
    pub fn apply_to(&self, input: &mut TickInput) {
        if !self.tilt_enabled {
            input.tilt = None;
        }
        input.idle_mode |= self.autopilot;
    }

    /// Effective effects volume (0 when muted)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music volume (0 when muted)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }
}
