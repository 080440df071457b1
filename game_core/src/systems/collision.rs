use crate::{Ball, CollisionMode, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls (touching counts): invert only, no position correction
        let r = config.ball_radius;
        if ball.pos.y - r <= 0.0 || ball.pos.y + r >= config.court_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Left paddle first, then right, each seeing the other's result
        for side in [Side::Left, Side::Right] {
            let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
                continue;
            };
            if let Some(hit_y) = paddle_contact(ball, paddle, config) {
                ball.vel.x = -ball.vel.x * config.ball_speed_increase;
                ball.vel.y = (hit_y - paddle.center_y(config)) * config.ball_deflection;
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Ball y at the moment of contact, if the ball touches this paddle
fn paddle_contact(ball: &Ball, paddle: &Paddle, config: &Config) -> Option<f32> {
    let face = config.paddle_face_x(paddle.side);
    let r = config.ball_radius;

    // Signed depth of the leading edge past the paddle face (positive = past)
    let depth = |x: f32| match paddle.side {
        Side::Left => face - (x - r),
        Side::Right => (x + r) - face,
    };

    let now = depth(ball.pos.x);
    if now > 0.0 && paddle.spans(ball.pos.y, config) {
        return Some(ball.pos.y);
    }

    if config.collision == CollisionMode::Swept {
        let before = depth(ball.prev_pos.x);
        if before <= 0.0 && now > 0.0 {
            let t = -before / (now - before);
            let y = ball.prev_pos.y + (ball.pos.y - ball.prev_pos.y) * t;
            if paddle.spans(y, config) {
                return Some(y);
            }
        }
    }

    None
}
