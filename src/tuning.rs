//! Data-driven game balance
//!
//! Every gameplay number the simulation reads at runtime. Speeds are in
//! pixels per frame and durations in frames: the engine advances one tick per
//! call, so these values are tied to the driver's frame rate.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a run
    pub starting_lives: u32,

    // === Ball ===
    /// Base launch speed before the per-level bonus
    pub ball_start_speed: f32,
    /// Speed added per level index
    pub ball_level_speed_step: f32,
    /// Cap on the per-level launch speed
    pub ball_level_speed_cap: f32,
    /// Speed while the super ball is active
    pub ball_max_speed: f32,

    // === Paddle ===
    pub paddle_speed: f32,
    pub paddle_default_width: f32,
    pub paddle_min_width: f32,
    pub paddle_max_width: f32,
    /// Tilt (degrees) that maps to the playfield edges
    pub tilt_range_degrees: f32,
    /// Fraction of the remaining distance to the tilt target covered per frame
    pub tilt_smoothing: f32,

    // === Power-ups ===
    /// Chance that a destroyed brick drops a power-up
    pub powerup_chance: f32,
    pub powerup_fall_speed: f32,
    pub wider_amount: f32,
    pub shrink_amount: f32,
    pub slow_factor: f32,
    pub slow_min_speed: f32,
    pub super_duration_frames: u32,
    /// Speed multiplier applied when the super ball wears off
    pub super_decay_factor: f32,
    pub super_min_speed: f32,

    // === Scoring ===
    /// Points per max hit point of a destroyed brick
    pub brick_score: u64,
    pub powerup_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,

            ball_start_speed: 5.0,
            ball_level_speed_step: 0.2,
            ball_level_speed_cap: 9.0,
            ball_max_speed: 10.0,

            paddle_speed: 8.0,
            paddle_default_width: 100.0,
            paddle_min_width: 40.0,
            paddle_max_width: 250.0,
            tilt_range_degrees: 45.0,
            tilt_smoothing: 0.2,

            powerup_chance: 0.15,
            powerup_fall_speed: 3.0,
            wider_amount: 40.0,
            shrink_amount: 30.0,
            slow_factor: 0.7,
            slow_min_speed: 4.0,
            super_duration_frames: 900,
            super_decay_factor: 0.8,
            super_min_speed: 6.0,

            brick_score: 10,
            powerup_score: 50,
        }
    }
}

impl Tuning {
    /// Ball speed at the start of `level`
    pub fn level_speed(&self, level: u32) -> f32 {
        (self.ball_start_speed + level as f32 * self.ball_level_speed_step)
            .min(self.ball_level_speed_cap)
    }

    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse tuning, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({e}), using defaults");
                Self::default()
            }
        }
    }
}
