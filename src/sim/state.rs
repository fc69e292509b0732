//! Game state and core simulation types
//!
//! `GameState` owns every mutable entity and run counter; subsystems receive it
//! by exclusive reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::generate_level;
use crate::consts::*;
use crate::theme::theme_index;
use crate::tuning::Tuning;
use crate::{heading, with_speed};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    Menu,
    /// Ball resting on the paddle, waiting for launch
    Idle,
    /// Active gameplay
    Playing,
    /// Frozen mid-play
    Paused,
    /// Out of lives
    GameOver,
    /// Final level cleared
    Victory,
}

impl GamePhase {
    /// Whether the per-frame step mutates entities in this phase
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Idle | GamePhase::Playing)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed; `vel` has this magnitude whenever the ball is active
    pub speed: f32,
    /// Launched (true) or resting on the paddle (false)
    pub active: bool,
    /// Super mode: destroys bricks in one hit without bouncing
    pub is_super: bool,
}

impl Ball {
    /// A fresh ball resting on top of the paddle
    pub fn resting(paddle: &Paddle, speed: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            speed,
            active: false,
            is_super: false,
        };
        ball.glue_to(paddle);
        ball
    }

    /// Keep a resting ball centred on the paddle
    pub fn glue_to(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius - 1.0);
    }

    /// Launch along `angle` (radians) at the current speed
    pub fn launch(&mut self, angle: f32) {
        self.vel = heading(angle) * self.speed;
        self.active = true;
    }

    /// Change speed, keeping the heading of a moving ball
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        if self.active {
            self.vel = with_speed(self.vel, speed);
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal pixels per frame while a direction is held
    pub speed: f32,
}

impl Paddle {
    /// A default-width paddle centred at the bottom of the playfield
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                (CANVAS_WIDTH - tuning.paddle_default_width) / 2.0,
                CANVAS_HEIGHT - PADDLE_Y_OFFSET,
            ),
            width: tuning.paddle_default_width,
            height: PADDLE_HEIGHT,
            speed: tuning.paddle_speed,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Rightmost legal x for the paddle's left edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        CANVAS_WIDTH - self.width
    }

    /// Keep the paddle inside the playfield
    pub fn clamp_to_canvas(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, self.max_x().max(0.0));
    }

    /// Change width by `delta`, bounded to `[min, max]`
    pub fn resize(&mut self, delta: f32, min: f32, max: f32) {
        self.width = (self.width + delta).clamp(min, max);
    }
}

/// Whether a brick is still in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// A brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub status: BrickStatus,
    /// Remaining hits
    pub hp: u8,
    /// Hits at creation; sets the score value
    pub max_hp: u8,
    /// 0xRRGGBB
    pub color: u32,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    /// Remove one hit point and recolor to the remaining tier.
    /// Returns true when the brick breaks.
    pub fn damage(&mut self) -> bool {
        self.hp = self.hp.saturating_sub(1);
        match self.hp {
            3 => self.color = COLOR_CEMENT_3,
            2 => self.color = COLOR_CEMENT_2,
            1 => self.color = BRICK_COLORS[0],
            _ => {}
        }
        if self.hp == 0 {
            self.status = BrickStatus::Destroyed;
        }
        self.hp == 0
    }

    /// Break the brick regardless of remaining hits
    pub fn destroy(&mut self) {
        self.hp = 0;
        self.status = BrickStatus::Destroyed;
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Paddle grows
    Wider,
    /// Paddle shrinks
    Shrink,
    /// One more life
    ExtraLife,
    /// Ball slows down
    Slow,
    /// Ball blasts through bricks for a while
    Super,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Wider,
        PowerUpKind::Shrink,
        PowerUpKind::ExtraLife,
        PowerUpKind::Slow,
        PowerUpKind::Super,
    ];

    /// Short capsule label
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::Wider => "WIDE",
            PowerUpKind::Shrink => "TINY",
            PowerUpKind::ExtraLife => "LIFE",
            PowerUpKind::Slow => "SLOW",
            PowerUpKind::Super => "SPER",
        }
    }

    /// Capsule color (0xRRGGBB)
    pub fn color(self) -> u32 {
        match self {
            PowerUpKind::Wider => 0x3b82f6,
            PowerUpKind::Shrink => 0xef4444,
            PowerUpKind::ExtraLife => 0x22c55e,
            PowerUpKind::Slow => 0xeab308,
            PowerUpKind::Super => 0xa855f7,
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Fall speed (pixels per frame)
    pub dy: f32,
    pub kind: PowerUpKind,
    pub active: bool,
}

/// Discrete outcomes of a frame, consumed by audio/visual collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side wall or the ceiling
    WallHit,
    PaddleHit,
    /// A brick broke
    BrickHit,
    /// A multi-hit brick absorbed a hit
    SteelHit,
    PowerUpCollected(PowerUpKind),
    /// Ball fell past the bottom edge
    LifeLost,
    LevelClear,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source of every random roll (launch angle, patterns, drops)
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    /// Frames left on the super ball
    pub super_ticks: u32,
    /// Index into `theme::THEMES`
    pub theme_index: usize,
    pub muted: bool,
    /// Simulated frame counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub power_ups: Vec<PowerUp>,
    /// Events produced during the current tick
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game at the title screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let paddle = Paddle::new(&tuning);
        let ball = Ball::resting(&paddle, tuning.level_speed(1));
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            super_ticks: 0,
            theme_index: 0,
            muted: false,
            time_ticks: 0,
            paddle,
            ball,
            bricks: Vec::new(),
            power_ups: Vec::new(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Begin a fresh run at level 1
    pub fn start_run(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 1;
        self.paddle = Paddle::new(&self.tuning);
        self.load_level(1);
        log::info!("Run started (seed {})", self.seed);
    }

    /// Generate `level`'s bricks and put the ball back on the paddle
    pub fn load_level(&mut self, level: u32) {
        self.level = level;
        self.theme_index = theme_index(level);
        self.bricks = generate_level(level, &mut self.rng);
        self.reset_ball();
        log::info!(
            "Level {} loaded: {} bricks, theme {}",
            level,
            self.bricks.len(),
            self.theme_index
        );
    }

    /// Fresh ball on a default-width paddle; cancels super mode and drops
    pub fn reset_ball(&mut self) {
        self.paddle.width = self.tuning.paddle_default_width;
        self.paddle.clamp_to_canvas();
        self.super_ticks = 0;
        self.ball = Ball::resting(&self.paddle, self.tuning.level_speed(self.level));
        self.power_ups.clear();
        self.phase = GamePhase::Idle;
    }

    /// Launch the resting ball roughly upward (±0.2 rad)
    pub fn launch_ball(&mut self) {
        let jitter = self.rng.random::<f32>() * 0.4 - 0.2;
        self.ball.launch(-std::f32::consts::FRAC_PI_2 + jitter);
        self.phase = GamePhase::Playing;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Number of bricks still in play
    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
