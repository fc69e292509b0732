//! Collision detection and response for axis-aligned bodies
//!
//! The ball is treated as its enclosing square for hit tests. Wall and brick
//! hits flip one velocity component; paddle hits use a fixed launch-angle law
//! instead of a physical bounce.

use glam::Vec2;
use std::f32::consts::FRAC_PI_3;

use super::state::{Ball, Brick, Paddle};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }
}

impl Ball {
    /// Enclosing square used for hit tests
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos - Vec2::splat(self.radius),
            Vec2::splat(self.radius * 2.0),
        )
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Axis along which a velocity component is flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Flip the velocity component along `axis`
#[inline]
pub fn reflect(vel: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::Horizontal => Vec2::new(-vel.x, vel.y),
        Axis::Vertical => Vec2::new(vel.x, -vel.y),
    }
}

/// Which playfield edges the ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Bounced off the left or right wall
    pub side: bool,
    /// Bounced off the ceiling
    pub ceiling: bool,
    /// Crossed the bottom edge (no bounce)
    pub floor: bool,
}

impl WallContact {
    /// Number of bounces (each is one wall cue)
    pub fn bounces(&self) -> usize {
        self.side as usize + self.ceiling as usize
    }
}

/// Keep the ball inside the side walls and ceiling, reflecting on contact.
/// The floor is only reported.
pub fn resolve_walls(ball: &mut Ball, width: f32, height: f32) -> WallContact {
    let mut contact = WallContact::default();

    if ball.pos.x + ball.radius > width {
        ball.pos.x = width - ball.radius;
        ball.vel = reflect(ball.vel, Axis::Horizontal);
        contact.side = true;
    } else if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel = reflect(ball.vel, Axis::Horizontal);
        contact.side = true;
    }

    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel = reflect(ball.vel, Axis::Vertical);
        contact.ceiling = true;
    } else if ball.pos.y + ball.radius > height {
        contact.floor = true;
    }

    contact
}

/// Ball centre strictly within the paddle's span and overlapping it vertically
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.pos.x + paddle.width
        && ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.y - ball.radius < paddle.pos.y + paddle.height
}

/// Launch angle from vertical for a hit at `x`: -60° at the left edge,
/// 0 at the centre, +60° at the right edge
pub fn deflection_angle(x: f32, paddle: &Paddle) -> f32 {
    let collide_point = ((x - paddle.center_x()) / (paddle.width / 2.0)).clamp(-1.0, 1.0);
    collide_point * FRAC_PI_3
}

/// Send the ball back up at its current speed and lift it clear of the paddle
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle) {
    let angle = deflection_angle(ball.pos.x, paddle);
    ball.vel = Vec2::new(angle.sin(), -angle.cos()) * ball.speed;
    ball.pos.y = paddle.pos.y - ball.radius - 1.0;
}

/// Axis with the smaller overlap between the ball and a brick.
///
/// Overlap is measured from whichever brick face the ball centre is nearer;
/// ties go to the vertical axis.
pub fn least_penetration_axis(ball: &Ball, brick: &Brick) -> Axis {
    let rect = brick.rect();
    let center = rect.center();

    let overlap_x = if ball.pos.x < center.x {
        (ball.pos.x + ball.radius) - rect.min.x
    } else {
        rect.max().x - (ball.pos.x - ball.radius)
    };
    let overlap_y = if ball.pos.y < center.y {
        (ball.pos.y + ball.radius) - rect.min.y
    } else {
        rect.max().y - (ball.pos.y - ball.radius)
    };

    if overlap_x < overlap_y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}
