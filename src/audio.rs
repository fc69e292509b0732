//! Sound effect planning
//!
//! Procedurally described sound effects - no external files needed!
//! Each engine event maps to one or more [`Tone`]s that a synthesizer
//! (Web Audio, cpal, ...) can play as plain oscillators with a decay envelope.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{GameEvent, PowerUpKind};
use crate::theme::{AudioProfile, THEMES, Waveform};

/// How a tone's pitch moves toward its sweep target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ramp {
    Linear,
    Exponential,
}

/// Pitch glide over the whole tone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sweep {
    /// Final frequency (Hz)
    pub to: f32,
    pub ramp: Ramp,
}

/// One oscillator note
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    /// Start frequency (Hz)
    pub freq: f32,
    pub waveform: Waveform,
    /// Offset from the cue's start (seconds)
    pub delay: f32,
    /// Seconds
    pub duration: f32,
    /// Pitch offset (cents)
    pub detune: f32,
    /// Peak gain, already scaled by the effective volume
    pub gain: f32,
    pub sweep: Option<Sweep>,
}

impl Tone {
    fn new(freq: f32, waveform: Waveform, duration: f32) -> Self {
        Self {
            freq,
            waveform,
            delay: 0.0,
            duration,
            detune: 0.0,
            gain: 0.1,
            sweep: None,
        }
    }

    fn at(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    fn detuned(mut self, cents: f32) -> Self {
        self.detune = cents;
        self
    }

    fn peak(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    fn sweep_to(mut self, to: f32, ramp: Ramp) -> Self {
        self.sweep = Some(Sweep { to, ramp });
        self
    }

    /// Time at which the tone has fully decayed
    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    profile: AudioProfile,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            profile: THEMES[0].audio,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Switch to the audio profile of theme `index`
    pub fn set_theme(&mut self, index: usize) {
        self.profile = THEMES[index % THEMES.len()].audio;
    }

    pub fn profile(&self) -> &AudioProfile {
        &self.profile
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip mute and return the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Tones to play for `event`; empty when muted
    pub fn plan(&self, event: &GameEvent) -> Vec<Tone> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return Vec::new();
        }

        let tones = match event {
            GameEvent::WallHit => vec![self.wall_hit()],
            GameEvent::PaddleHit => vec![self.paddle_hit()],
            GameEvent::BrickHit => vec![self.brick_hit()],
            GameEvent::SteelHit => vec![self.steel_hit()],
            GameEvent::PowerUpCollected(kind) => self.power_up(*kind),
            GameEvent::LevelClear => self.level_clear(),
            GameEvent::LifeLost => vec![self.life_lost()],
            // The life-lost sweep already covers the final ball
            GameEvent::GameOver => Vec::new(),
        };

        tones
            .into_iter()
            .map(|tone| Tone {
                gain: tone.gain * vol,
                ..tone
            })
            .collect()
    }

    // === Sound generators ===

    /// Wall hit - short low blip
    fn wall_hit(&self) -> Tone {
        Tone::new(150.0, Waveform::Sine, 0.05).detuned(self.profile.sfx_detune)
    }

    /// Paddle hit - rising chirp in the theme's lead voice
    fn paddle_hit(&self) -> Tone {
        Tone::new(200.0, self.profile.music_wave, 0.1)
            .sweep_to(400.0, Ramp::Linear)
            .detuned(self.profile.sfx_detune)
            .peak(0.2)
    }

    /// Brick break - punchy square
    fn brick_hit(&self) -> Tone {
        Tone::new(450.0, Waveform::Square, 0.08).detuned(self.profile.sfx_detune)
    }

    /// Multi-hit brick - metallic downward zap
    fn steel_hit(&self) -> Tone {
        Tone::new(800.0, Waveform::Sawtooth, 0.15)
            .sweep_to(100.0, Ramp::Exponential)
            .detuned(-150.0)
    }

    /// Power-up - C major arpeggio; every kind sounds the same
    fn power_up(&self, _kind: PowerUpKind) -> Vec<Tone> {
        const NOTES: [(f32, f32, f32); 4] = [
            (523.25, 0.0, 0.1),
            (659.25, 0.1, 0.1),
            (783.99, 0.2, 0.2),
            (1046.5, 0.3, 0.4),
        ];
        NOTES
            .iter()
            .map(|&(freq, delay, duration)| {
                Tone::new(freq, Waveform::Sine, duration)
                    .at(delay)
                    .detuned(self.profile.sfx_detune)
            })
            .collect()
    }

    /// Level clear - rising square fanfare
    fn level_clear(&self) -> Vec<Tone> {
        [0.0, 0.15, 0.3, 0.6]
            .into_iter()
            .enumerate()
            .map(|(i, t)| Tone::new(440.0 * (1.0 + i as f32 * 0.25), Waveform::Square, 0.3).at(t))
            .collect()
    }

    /// Ball lost - long sawtooth dive
    fn life_lost(&self) -> Tone {
        Tone::new(300.0, Waveform::Sawtooth, 1.0)
            .sweep_to(50.0, Ramp::Exponential)
            .peak(0.3)
    }
}
