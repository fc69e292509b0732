//! Level themes
//!
//! Each level picks one of six themes. The simulation only tracks the index;
//! renderers and synthesizers read palettes and audio profiles from here.

use serde::{Deserialize, Serialize};

/// Oscillator shape for a theme's music and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// Theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeKind {
    Neon,
    Toxic,
    Volcanic,
    Glacial,
    Matrix,
    Void,
}

/// Music and effect parameters for a theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioProfile {
    pub music_wave: Waveform,
    pub bass_wave: Waveform,
    /// Beats per minute
    pub tempo: f32,
    /// Bassline frequencies (Hz)
    pub scale: [f32; 8],
    /// Low-pass cutoff (Hz)
    pub filter_freq: f32,
    /// Pitch shift for sound effects (cents)
    pub sfx_detune: f32,
}

/// Visual and audio description of a theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub kind: ThemeKind,
    pub name: &'static str,
    /// Background gradient [top, bottom] (0xRRGGBB)
    pub bg_gradient: [u32; 2],
    pub paddle_color: u32,
    pub ball_glow: u32,
    /// Background particle color and alpha
    pub particle_color: (u32, f32),
    pub audio: AudioProfile,
}

const SCALE_MINOR: [f32; 8] = [110.0, 110.0, 130.8, 130.8, 98.0, 98.0, 110.0, 110.0];
const SCALE_PHRYGIAN: [f32; 8] = [82.4, 87.3, 110.0, 87.3, 82.4, 73.4, 82.4, 82.4];
const SCALE_AGGRESSIVE: [f32; 8] = [73.4, 73.4, 73.4, 110.0, 65.4, 65.4, 98.0, 73.4];
const SCALE_MAJOR_ARP: [f32; 8] = [130.8, 164.8, 196.0, 261.6, 196.0, 164.8, 130.8, 130.8];
const SCALE_PENTATONIC: [f32; 8] = [110.0, 130.8, 146.8, 164.8, 146.8, 130.8, 110.0, 98.0];
const SCALE_VOID: [f32; 8] = [65.4, 65.4, 77.7, 77.7, 55.0, 55.0, 65.4, 65.4];

/// All themes, in level order
pub const THEMES: [Theme; 6] = [
    Theme {
        kind: ThemeKind::Neon,
        name: "Neon City",
        bg_gradient: [0x111827, 0x1e1b4b],
        paddle_color: 0x3b82f6,
        ball_glow: 0x60a5fa,
        particle_color: (0x3b82f6, 0.2),
        audio: AudioProfile {
            music_wave: Waveform::Triangle,
            bass_wave: Waveform::Triangle,
            tempo: 120.0,
            scale: SCALE_MINOR,
            filter_freq: 800.0,
            sfx_detune: 0.0,
        },
    },
    Theme {
        kind: ThemeKind::Toxic,
        name: "Toxic Sewer",
        bg_gradient: [0x022c22, 0x052e16],
        paddle_color: 0x22c55e,
        ball_glow: 0x4ade80,
        particle_color: (0x22c55e, 0.2),
        audio: AudioProfile {
            music_wave: Waveform::Sawtooth,
            bass_wave: Waveform::Sawtooth,
            tempo: 105.0,
            scale: SCALE_PHRYGIAN,
            filter_freq: 400.0,
            sfx_detune: -200.0,
        },
    },
    Theme {
        kind: ThemeKind::Volcanic,
        name: "Magma Core",
        bg_gradient: [0x450a0a, 0x7f1d1d],
        paddle_color: 0xef4444,
        ball_glow: 0xf87171,
        particle_color: (0xef4444, 0.3),
        audio: AudioProfile {
            music_wave: Waveform::Square,
            bass_wave: Waveform::Square,
            tempo: 140.0,
            scale: SCALE_AGGRESSIVE,
            filter_freq: 2000.0,
            sfx_detune: -100.0,
        },
    },
    Theme {
        kind: ThemeKind::Glacial,
        name: "Ice Cavern",
        bg_gradient: [0x083344, 0x164e63],
        paddle_color: 0x06b6d4,
        ball_glow: 0x67e8f9,
        particle_color: (0x67e8f9, 0.3),
        audio: AudioProfile {
            music_wave: Waveform::Sine,
            bass_wave: Waveform::Triangle,
            tempo: 95.0,
            scale: SCALE_MAJOR_ARP,
            filter_freq: 1200.0,
            sfx_detune: 300.0,
        },
    },
    Theme {
        kind: ThemeKind::Matrix,
        name: "Mainframe",
        bg_gradient: [0x000000, 0x020617],
        paddle_color: 0x10b981,
        ball_glow: 0x34d399,
        particle_color: (0x10b981, 0.2),
        audio: AudioProfile {
            music_wave: Waveform::Square,
            bass_wave: Waveform::Sawtooth,
            tempo: 128.0,
            scale: SCALE_PENTATONIC,
            filter_freq: 1500.0,
            sfx_detune: 100.0,
        },
    },
    Theme {
        kind: ThemeKind::Void,
        name: "Cosmic Void",
        bg_gradient: [0x0f0720, 0x2e1065],
        paddle_color: 0xa855f7,
        ball_glow: 0xc084fc,
        particle_color: (0xffffff, 0.5),
        audio: AudioProfile {
            music_wave: Waveform::Sine,
            bass_wave: Waveform::Sine,
            tempo: 80.0,
            scale: SCALE_VOID,
            filter_freq: 300.0,
            sfx_detune: -400.0,
        },
    },
];

/// Theme index for a 1-based level
pub fn theme_index(level: u32) -> usize {
    (level.max(1) as usize - 1) % THEMES.len()
}

/// Theme for a 1-based level
pub fn theme_for_level(level: u32) -> &'static Theme {
    &THEMES[theme_index(level)]
}
