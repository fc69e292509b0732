//! Read-only view of the game for renderers and UI

use serde::Serialize;

use super::state::{Ball, Brick, GamePhase, GameState, Paddle, PowerUp};

/// Everything a frame needs to draw, detached from the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub is_super: bool,
    pub super_ticks: u32,
    pub theme_index: usize,
    pub muted: bool,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks only
    pub bricks: Vec<Brick>,
    pub power_ups: Vec<PowerUp>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            level: self.level,
            is_super: self.ball.is_super,
            super_ticks: self.super_ticks,
            theme_index: self.theme_index,
            muted: self.muted,
            paddle: self.paddle.clone(),
            ball: self.ball.clone(),
            bricks: self.bricks.iter().filter(|b| b.is_active()).cloned().collect(),
            power_ups: self.power_ups.clone(),
        }
    }
}
