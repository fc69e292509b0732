//! Neon Breaker - a themed brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (levels, physics, power-ups, game phases)
//! - `theme`: Per-level palettes and audio profiles
//! - `audio`: Turns simulation events into tone descriptions for a synthesizer
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod settings;
pub mod sim;
pub mod theme;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle geometry
    pub const PADDLE_HEIGHT: f32 = 16.0;
    /// Distance from the bottom edge to the paddle top
    pub const PADDLE_Y_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;

    /// Last level; clearing it wins the run
    pub const MAX_LEVELS: u32 = 24;

    /// Power-up capsule size
    pub const POWERUP_WIDTH: f32 = 40.0;
    pub const POWERUP_HEIGHT: f32 = 16.0;

    /// Brick grid layout
    pub const BRICK_COLUMNS: usize = 9;
    pub const BRICK_BASE_ROWS: usize = 4;
    pub const BRICK_MAX_ROWS: usize = 14;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_WIDTH: f32 = (CANVAS_WIDTH
        - BRICK_OFFSET_LEFT * 2.0
        - BRICK_PADDING * (BRICK_COLUMNS as f32 - 1.0))
        / BRICK_COLUMNS as f32;

    /// Row colors for single-hit bricks (0xRRGGBB)
    pub const BRICK_COLORS: [u32; 6] = [
        0xef4444, // red
        0xf97316, // orange
        0xeab308, // yellow
        0x22c55e, // green
        0x3b82f6, // blue
        0xa855f7, // purple
    ];

    /// Cement colors for multi-hit bricks
    pub const COLOR_CEMENT_4: u32 = 0x4b5563;
    pub const COLOR_CEMENT_3: u32 = 0x6b7280;
    pub const COLOR_CEMENT_2: u32 = 0x9ca3af;
}

/// Unit vector pointing along `angle` (radians, screen coordinates: +y is down)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Rescale a velocity to `speed` while keeping its direction
#[inline]
pub fn with_speed(vel: Vec2, speed: f32) -> Vec2 {
    heading(vel.y.atan2(vel.x)) * speed
}
