use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 1
    Right, // Player 2
}

impl Side {
    /// 1-based player number shown to players
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to court)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Strict containment: a ball center exactly on an edge misses
    pub fn spans(&self, y: f32, config: &Config) -> bool {
        y > self.y && y < self.y + config.paddle_height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub prev_pos: Vec2, // Position at the start of the current tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            prev_pos: pos,
        }
    }

    /// Serve from the center: horizontal speed keeps its magnitude but
    /// reverses direction, vertical speed is re-rolled.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.court_center();
        self.prev_pos = self.pos;

        self.vel.x = if self.vel.x > 0.0 {
            -self.vel.x.abs()
        } else {
            self.vel.x.abs()
        };
        self.vel.y = rng.0.gen_range(-1.0f32..=1.0) * config.serve_max_vy;
    }
}

/// Held keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_spans_is_strict() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 100.0);
        assert!(paddle.spans(150.0, &config));
        assert!(!paddle.spans(100.0, &config), "Top edge is excluded");
        assert!(!paddle.spans(200.0, &config), "Bottom edge is excluded");
        assert_eq!(paddle.center_y(&config), 150.0);
    }

    #[test]
    fn test_ball_reset_flips_direction_and_keeps_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-3.0, 50.0), Vec2::new(-11.5, 2.0));

        ball.reset(&config, &mut rng);

        assert_eq!(ball.pos, config.court_center());
        assert_eq!(ball.prev_pos, ball.pos);
        assert_eq!(ball.vel.x, 11.5);
        assert!(ball.vel.y >= -7.0 && ball.vel.y <= 7.0);

        ball.reset(&config, &mut rng);
        assert_eq!(ball.vel.x, -11.5);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.player_number(), 1);
        assert_eq!(Side::Right.player_number(), 2);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
