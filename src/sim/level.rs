//! Level generation
//!
//! A level is a 9-column grid whose row count grows with the level index. One
//! of 24 patterns decides which cells hold a brick and its base hit points;
//! a difficulty roll then toughens single-hit bricks on later levels.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Brick, BrickStatus};
use crate::consts::*;

/// Brick layout rule for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    Solid,
    Checker,
    Stripes,
    Columns,
    Pyramid,
    InvertedPyramid,
    Frame,
    Steps,
    Diamond,
    Towers,
    Scatter,
    Wall,
    HardChecker,
    ArrowHead,
    Bunker,
    Dna,
    XShape,
    HardStripes,
    Mosaic,
    Fortress,
    Cage,
    Rain,
    Invaders,
    Boss,
}

/// Patterns in level order
pub const PATTERNS: [Pattern; MAX_LEVELS as usize] = [
    Pattern::Solid,
    Pattern::Checker,
    Pattern::Stripes,
    Pattern::Columns,
    Pattern::Pyramid,
    Pattern::InvertedPyramid,
    Pattern::Frame,
    Pattern::Steps,
    Pattern::Diamond,
    Pattern::Towers,
    Pattern::Scatter,
    Pattern::Wall,
    Pattern::HardChecker,
    Pattern::ArrowHead,
    Pattern::Bunker,
    Pattern::Dna,
    Pattern::XShape,
    Pattern::HardStripes,
    Pattern::Mosaic,
    Pattern::Fortress,
    Pattern::Cage,
    Pattern::Rain,
    Pattern::Invaders,
    Pattern::Boss,
];

impl Pattern {
    /// Pattern for a 1-based level.
    ///
    /// Panics outside `1..=MAX_LEVELS`: the phase machine declares victory
    /// before a level past the last can be requested.
    pub fn for_level(level: u32) -> Self {
        assert!(
            (1..=MAX_LEVELS).contains(&level),
            "level {level} outside 1..={MAX_LEVELS}"
        );
        PATTERNS[(level - 1) as usize]
    }

    /// Whether placement or hit points depend on the RNG
    pub fn is_randomized(self) -> bool {
        matches!(self, Pattern::Scatter | Pattern::Rain)
    }

    /// Base hit points of the cell at (`row`, `col`), or `None` if empty
    pub fn cell<R: Rng>(self, row: usize, col: usize, rng: &mut R) -> Option<u8> {
        let (r, c) = (row as i32, col as i32);
        let last = BRICK_COLUMNS as i32 - 1;
        let mid = last / 2;

        let (place, hp) = match self {
            Pattern::Solid => (r < 4, 1),
            Pattern::Checker => ((r + c) % 2 == 0 && r < 5, 1),
            Pattern::Stripes => (r % 2 == 0, 1),
            Pattern::Columns => (c % 2 == 0 && r < 6, 1),
            Pattern::Pyramid => (r >= (c - mid).abs(), 1),
            Pattern::InvertedPyramid => (r <= (c - mid).abs() && r < 5, 1),
            Pattern::Frame => {
                let core = r == 3 && c == mid;
                let border = r == 0 || r == 5 || c == 0 || c == last;
                (border || core, if core { 2 } else { 1 })
            }
            Pattern::Steps => (c >= r, 1),
            Pattern::Diamond => ((c - mid).abs() + (r - 3).abs() <= 3, 1),
            Pattern::Towers => (c < 2 || c > last - 2, 1),
            Pattern::Scatter => (rng.random::<f32>() > 0.4, 1),
            Pattern::Wall => (true, if r < 2 { 2 } else { 1 }),
            Pattern::HardChecker => ((r + c) % 2 == 1, if r < 2 { 2 } else { 1 }),
            Pattern::ArrowHead => ((c - mid).abs() <= r, if c == mid { 3 } else { 1 }),
            Pattern::Bunker => {
                let gate = c > 2 && c < 6;
                (r > 1 || gate, if r == 0 && gate { 4 } else { 1 })
            }
            Pattern::Dna => ((c + r) % 4 == 0 || (c - r).rem_euclid(4) == 0, 2),
            Pattern::XShape => (c == r || c == last - r, 3),
            Pattern::HardStripes => (r % 2 == 1, if r == 1 { 3 } else { 2 }),
            Pattern::Mosaic => (true, (c * r) % 3 + 1),
            Pattern::Fortress => {
                let wall = r == 0 || r == 7 || c == 0 || c == last;
                (r < 8, if wall { 4 } else { 1 })
            }
            Pattern::Cage => (c % 2 == 0 && r % 2 == 0, 4),
            Pattern::Rain => {
                let place = rng.random::<f32>() > 0.3;
                (place, rng.random_range(1..=3))
            }
            Pattern::Invaders => (r != 2 && c != 1 && c != last - 1, if r == 0 { 3 } else { 1 }),
            Pattern::Boss => (true, (4 - r / 2).max(1)),
        };

        place.then_some(hp as u8)
    }
}

/// Rows in the grid for `level`
pub fn row_count(level: u32) -> usize {
    (BRICK_BASE_ROWS + level as usize / 3).min(BRICK_MAX_ROWS)
}

/// Randomly upgrade a single-hit brick; the odds grow with the level
fn toughen<R: Rng>(hp: u8, level: u32, rng: &mut R) -> u8 {
    if hp != 1 || level < 2 {
        return hp;
    }

    let roll: f32 = rng.random();
    if level >= 5 {
        let bonus = (level - 5) as f32 * 0.01;
        if roll < 0.05 + bonus {
            4
        } else if roll < 0.15 + bonus {
            3
        } else if roll < 0.30 {
            2
        } else {
            1
        }
    } else if roll < 0.15 {
        2
    } else {
        1
    }
}

/// Color for a fresh brick: cement for multi-hit, row palette otherwise
pub fn brick_color(hp: u8, row: usize, level: u32) -> u32 {
    match hp {
        4 => COLOR_CEMENT_4,
        3 => COLOR_CEMENT_3,
        2 => COLOR_CEMENT_2,
        _ => BRICK_COLORS[(row + level as usize) % BRICK_COLORS.len()],
    }
}

/// Top-left corner of the grid cell at (`row`, `col`)
pub fn cell_origin(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
        row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
    )
}

/// Generate the bricks for a 1-based level
pub fn generate_level<R: Rng>(level: u32, rng: &mut R) -> Vec<Brick> {
    let pattern = Pattern::for_level(level);
    let rows = row_count(level);
    let mut bricks = Vec::with_capacity(BRICK_COLUMNS * rows);

    for col in 0..BRICK_COLUMNS {
        for row in 0..rows {
            let Some(base_hp) = pattern.cell(row, col, rng) else {
                continue;
            };
            let hp = toughen(base_hp, level, rng);

            bricks.push(Brick {
                pos: cell_origin(row, col),
                width: BRICK_WIDTH,
                height: BRICK_HEIGHT,
                status: BrickStatus::Active,
                hp,
                max_hp: hp,
                color: brick_color(hp, row, level),
            });
        }
    }

    log::debug!("Generated level {level} ({pattern:?}): {} bricks", bricks.len());
    bricks
}
