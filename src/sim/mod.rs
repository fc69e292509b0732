//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-based stepping only
//! - Seeded RNG only
//! - Stable iteration order (bricks in generation order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod phase;
pub mod powerup;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Axis, Rect, WallContact};
pub use level::{Pattern, generate_level};
pub use phase::{Action, Transition, transition};
pub use powerup::{apply_effect, roll_drop};
pub use snapshot::Snapshot;
pub use state::{
    Ball, Brick, BrickStatus, GameEvent, GamePhase, GameState, Paddle, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};
