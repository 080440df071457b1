use crate::{Ball, Config, GameMode, InputState, Paddle};
use hecs::World;

/// Apply held keys to every human-controlled paddle
pub fn move_paddles(world: &mut World, input: &InputState, mode: GameMode, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if mode.ai_controls(paddle.side) {
            continue;
        }

        // Each key is gated on its own bound, so holding both at the top still moves down
        let keys = input.paddle(paddle.side);
        if keys.up && paddle.y > 0.0 {
            paddle.y -= config.paddle_speed;
        }
        if keys.down && paddle.y < config.paddle_max_y() {
            paddle.y += config.paddle_speed;
        }

        // Clamp to court bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.prev_pos = ball.pos;
        ball.pos += ball.vel;
    }
}
