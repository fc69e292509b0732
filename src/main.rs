//! Neon Breaker headless runner
//!
//! Plays the game with the autopilot for a fixed number of frames, routes
//! events through the audio planner, and prints the final snapshot as JSON.
//!
//! Usage: `neon-breaker [seed] [frames] [tuning.json] [settings.json]`

use std::path::Path;

use neon_breaker::audio::AudioManager;
use neon_breaker::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use neon_breaker::{Settings, Tuning};

const DEFAULT_SEED: u64 = 1;
/// One minute at 60 fps
const DEFAULT_FRAMES: u64 = 60 * 60;

/// Counters collected over a headless session
#[derive(Debug, Default)]
struct RunStats {
    runs_finished: u32,
    victories: u32,
    best_score: u64,
    bricks_broken: u64,
    steel_hits: u64,
    paddle_hits: u64,
    lives_lost: u64,
    levels_cleared: u64,
    power_ups: u64,
    tones: u64,
}

impl RunStats {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BrickHit => self.bricks_broken += 1,
            GameEvent::SteelHit => self.steel_hits += 1,
            GameEvent::PaddleHit => self.paddle_hits += 1,
            GameEvent::LifeLost => self.lives_lost += 1,
            GameEvent::LevelClear => self.levels_cleared += 1,
            GameEvent::PowerUpCollected(_) => self.power_ups += 1,
            GameEvent::GameOver => self.runs_finished += 1,
            GameEvent::WallHit => {}
        }
    }
}

/// Read a JSON config file, or fall back to `default` when it can't be read
fn load_config<T>(path: Option<&str>, parse: fn(&str) -> T, default: fn() -> T) -> T {
    let Some(path) = path else {
        return default();
    };
    match std::fs::read_to_string(Path::new(path)) {
        Ok(json) => parse(&json),
        Err(e) => {
            log::warn!("Could not read {path}: {e}, using defaults");
            default()
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args
        .first()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let frames = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let tuning = load_config(
        args.get(2).map(String::as_str),
        Tuning::from_json_or_default,
        Tuning::default,
    );
    // Without a settings file the runner plays itself
    let settings = load_config(args.get(3).map(String::as_str), Settings::load_or_default, || {
        Settings {
            autopilot: true,
            ..Settings::default()
        }
    });
    if !settings.autopilot {
        log::warn!("Autopilot disabled: no input source, the game will stay at the menu");
    }

    log::info!("Neon Breaker (headless) starting: seed {seed}, {frames} frames");

    let mut state = GameState::with_tuning(seed, tuning);
    state.muted = settings.muted;
    let mut audio = AudioManager::new(&settings);
    let mut stats = RunStats::default();

    let mut input = TickInput::default();
    settings.apply_to(&mut input);
    let mut last_phase = state.phase;

    for _ in 0..frames {
        let events = tick(&mut state, &input);

        audio.set_theme(state.theme_index);
        audio.set_muted(state.muted);
        for event in &events {
            stats.record(event);
            stats.tones += audio.plan(event).len() as u64;
        }

        if state.phase != last_phase {
            if state.phase == GamePhase::Victory {
                stats.victories += 1;
                stats.runs_finished += 1;
            }
            if matches!(state.phase, GamePhase::GameOver | GamePhase::Victory) {
                stats.best_score = stats.best_score.max(state.score);
            }
            last_phase = state.phase;
        }
    }
    stats.best_score = stats.best_score.max(state.score);

    log::info!(
        "Finished {} frames: level {}, score {}, lives {}",
        state.time_ticks,
        state.level,
        state.score,
        state.lives
    );
    log::info!("{stats:?}");

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
