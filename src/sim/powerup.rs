//! Power-up drops, falling capsules, and their effects

use glam::Vec2;
use rand::Rng;

use super::state::{Brick, GameEvent, GameState, PowerUp, PowerUpKind};
use crate::consts::*;
use crate::tuning::Tuning;

impl PowerUpKind {
    /// Map a uniform roll in `[0, 1)` to a kind.
    ///
    /// Bands: Wider 20%, Slow 20%, ExtraLife 10%, Shrink 20%, Super 30%.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.20 {
            PowerUpKind::Wider
        } else if roll < 0.40 {
            PowerUpKind::Slow
        } else if roll < 0.50 {
            PowerUpKind::ExtraLife
        } else if roll < 0.70 {
            PowerUpKind::Shrink
        } else {
            PowerUpKind::Super
        }
    }
}

/// Roll for a drop from a destroyed brick
pub fn roll_drop<R: Rng>(brick: &Brick, tuning: &Tuning, rng: &mut R) -> Option<PowerUp> {
    if rng.random::<f32>() >= tuning.powerup_chance {
        return None;
    }
    let kind = PowerUpKind::from_roll(rng.random());

    Some(PowerUp {
        pos: Vec2::new(
            brick.pos.x + brick.width / 2.0 - POWERUP_WIDTH / 2.0,
            brick.pos.y,
        ),
        width: POWERUP_WIDTH,
        height: POWERUP_HEIGHT,
        dy: tuning.powerup_fall_speed,
        kind,
        active: true,
    })
}

/// Apply a caught power-up to the run
pub fn apply_effect(state: &mut GameState, kind: PowerUpKind) {
    let tuning = &state.tuning;
    match kind {
        PowerUpKind::Wider => state.paddle.resize(
            tuning.wider_amount,
            tuning.paddle_min_width,
            tuning.paddle_max_width,
        ),
        PowerUpKind::Shrink => state.paddle.resize(
            -tuning.shrink_amount,
            tuning.paddle_min_width,
            tuning.paddle_max_width,
        ),
        PowerUpKind::ExtraLife => state.lives += 1,
        PowerUpKind::Slow => {
            let speed = (state.ball.speed * tuning.slow_factor).max(tuning.slow_min_speed);
            state.ball.set_speed(speed);
        }
        PowerUpKind::Super => {
            state.ball.is_super = true;
            state.super_ticks = tuning.super_duration_frames;
            let speed = tuning.ball_max_speed;
            state.ball.set_speed(speed);
        }
    }
    // A wider paddle may now poke past the right wall
    state.paddle.clamp_to_canvas();
}

/// Move capsules down, hand caught ones to the paddle, drop the rest off-screen
pub fn update_power_ups(state: &mut GameState) {
    let paddle = state.paddle.rect();
    let mut caught = Vec::new();

    for power_up in state.power_ups.iter_mut().filter(|p| p.active) {
        power_up.pos.y += power_up.dy;

        let rect = super::collision::Rect::new(
            power_up.pos,
            Vec2::new(power_up.width, power_up.height),
        );
        if rect.overlaps(&paddle) {
            power_up.active = false;
            caught.push(power_up.kind);
        }
        if power_up.pos.y > CANVAS_HEIGHT {
            power_up.active = false;
        }
    }
    state.power_ups.retain(|p| p.active);

    for kind in caught {
        apply_effect(state, kind);
        state.score += state.tuning.powerup_score;
        state.emit(GameEvent::PowerUpCollected(kind));
        log::debug!("Power-up collected: {kind:?}");
    }
}
