use rand::Rng;

use crate::{Ball, Config, Difficulty, GameRng, Paddle, Params, Side};
use hecs::World;

/// Tuning for one AI difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Fraction of the remaining distance (times paddle speed) covered per tick
    pub reaction_speed: f32,
    /// Largest prediction error, in court units
    pub error_margin: f32,
    /// Probability the prediction is used without error
    pub prediction_accuracy: f32,
}

impl Difficulty {
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                reaction_speed: 0.03,
                error_margin: 30.0,
                prediction_accuracy: 0.70,
            },
            Difficulty::Medium => DifficultyProfile {
                reaction_speed: 0.06,
                error_margin: 15.0,
                prediction_accuracy: 0.85,
            },
            Difficulty::Hard => DifficultyProfile {
                reaction_speed: 0.09,
                error_margin: 5.0,
                prediction_accuracy: 0.95,
            },
        }
    }
}

/// Mirror a y coordinate back into [0, height] once per wall it would hit.
///
/// The loop is capped; anything still outside afterwards is clamped.
pub fn fold_into_court(mut y: f32, height: f32) -> f32 {
    for _ in 0..Params::PREDICTION_MAX_REFLECTIONS {
        if y < 0.0 {
            y = -y;
        } else if y > height {
            y = 2.0 * height - y;
        } else {
            return y;
        }
    }
    y.clamp(0.0, height)
}

/// Where the ball will cross the right edge, ignoring paddles.
///
/// Returns `None` when the ball is not heading right.
pub fn predict_intercept_y(ball: &Ball, config: &Config) -> Option<f32> {
    if ball.vel.x <= 0.0 {
        return None;
    }

    let distance_x = config.court_width - config.ball_radius - ball.pos.x;
    let predicted = ball.pos.y + ball.vel.y * (distance_x / ball.vel.x);
    if !predicted.is_finite() {
        return None;
    }

    Some(fold_into_court(predicted, config.court_height))
}

/// Target center for the AI paddle: predicted intercept (with injected
/// error) when the ball is incoming, its own center otherwise.
pub fn ai_target_y(
    ball: &Ball,
    paddle: &Paddle,
    config: &Config,
    profile: &DifficultyProfile,
    rng: &mut GameRng,
) -> f32 {
    let Some(mut target) = predict_intercept_y(ball, config) else {
        return paddle.center_y(config);
    };

    if rng.0.gen::<f32>() > profile.prediction_accuracy {
        target += rng.0.gen_range(-1.0f32..=1.0) * profile.error_margin;
    }
    target
}

/// Drive the right paddle toward the predicted intercept
pub fn update_ai(world: &mut World, config: &Config, difficulty: Difficulty, rng: &mut GameRng) {
    let profile = difficulty.profile();

    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let target = ai_target_y(&ball, paddle, config, &profile, rng);
        let distance = target - paddle.center_y(config);

        // Damped approach: lower difficulties visibly lag behind
        paddle.y += distance * profile.reaction_speed * config.paddle_speed;
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
