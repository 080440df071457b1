use glam::Vec2;
use thiserror::Error;

use crate::{Params, Side};

/// How ball-paddle contact is detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// Test only the post-move position. Fast balls can tunnel through.
    #[default]
    Discrete,
    /// Also catch a leading edge that crossed the paddle face during the tick.
    Swept,
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("court dimensions must be positive, got {width}x{height}")]
    InvalidCourt { width: f32, height: f32 },
    #[error("paddle dimensions must be positive, got {width}x{height}")]
    InvalidPaddle { width: f32, height: f32 },
    #[error("paddle height {paddle} does not fit a court of height {court}")]
    PaddleTooTall { paddle: f32, court: f32 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    pub ball_deflection: f32,
    pub serve_max_vy: f32,
    pub win_score: u8,
    pub collision: CollisionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_deflection: Params::BALL_DEFLECTION,
            serve_max_vy: Params::SERVE_MAX_VY,
            win_score: Params::WIN_SCORE,
            collision: CollisionMode::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision(mut self, collision: CollisionMode) -> Self {
        self.collision = collision;
        self
    }

    /// Check that the values describe a playable court
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("court width", self.court_width),
            ("court height", self.court_height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("paddle speed", self.paddle_speed),
            ("ball radius", self.ball_radius),
            ("initial ball speed", self.ball_speed_initial),
            ("ball speed increase", self.ball_speed_increase),
            ("ball deflection", self.ball_deflection),
            ("serve vertical speed", self.serve_max_vy),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if !(self.court_width > 0.0 && self.court_height > 0.0) {
            return Err(ConfigError::InvalidCourt {
                width: self.court_width,
                height: self.court_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.court_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }
        for (name, value) in [
            ("paddle speed", self.paddle_speed),
            ("ball radius", self.ball_radius),
            ("initial ball speed", self.ball_speed_initial),
            ("ball speed increase", self.ball_speed_increase),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.serve_max_vy < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "serve vertical speed",
                value: self.serve_max_vy,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Lowest allowed paddle top edge
    pub fn paddle_max_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Clamp paddle top edge to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Starting top edge for both paddles (vertically centered)
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.court_height - self.paddle_height) / 2.0
    }

    /// X of the paddle face the ball strikes
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width,
            Side::Right => self.court_width - self.paddle_width,
        }
    }

    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_face_x() {
        let config = Config::new();
        assert_eq!(config.paddle_face_x(Side::Left), 10.0, "Left paddle face");
        assert_eq!(config.paddle_face_x(Side::Right), 790.0, "Right paddle face");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-5.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0), 300.0);
        assert_eq!(config.clamp_paddle_y(150.0), 150.0);
    }

    #[test]
    fn test_paddle_spawn_is_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 150.0);
        assert_eq!(config.court_center(), Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 500.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddleTooTall {
                paddle: 500.0,
                court: 400.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        let config = Config {
            paddle_speed: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "paddle speed",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_validate_rejects_nan_court() {
        let config = Config {
            court_width: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "court width",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_values() {
        let config = Config {
            serve_max_vy: f32::INFINITY,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "serve vertical speed",
                value: f32::INFINITY
            })
        );

        let config = Config {
            court_height: f32::INFINITY,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "court height",
                ..
            })
        ));

        let config = Config {
            ball_deflection: f32::NEG_INFINITY,
            ..Config::new()
        };
        assert!(config.validate().is_err());
    }
}
