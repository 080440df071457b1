pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Advance the Pong simulation by one tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    victory: &mut Option<VictoryEffect>,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Human paddles (stay responsive after the match ends)
    move_paddles(world, input, state.mode, config);

    // 2. AI paddle
    if state.mode == GameMode::OnePlayer {
        update_ai(world, config, state.difficulty, rng);
    }

    if !state.game_over {
        // 3. Move ball
        move_ball(world);

        // 4. Check collisions (ball vs walls, paddles)
        check_collisions(world, config, events);

        // 5. Check scoring (ball exited court)
        check_scoring(world, config, state, score, events, rng, victory);
    } else if let Some(effect) = victory.as_mut() {
        // 6. Victory animation
        effect.advance(config, rng);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
