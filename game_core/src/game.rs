//! Match lifecycle: the single owner of all simulation state.

use glam::Vec2;
use hecs::World;

use crate::{
    check_winner, create_ball, create_paddle, step, Ball, Config, ConfigError, Difficulty,
    Events, GameMode, GameRng, InputState, MatchState, Paddle, Score, Side, VictoryEffect,
};

/// Scalar state a renderer needs each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball_pos: Vec2,
    pub score: Score,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub animation_frame: u32,
}

/// A local Pong match (one player vs. AI, or two players on one keyboard)
pub struct Game {
    world: World,
    config: Config,
    state: MatchState,
    input: InputState,
    score: Score,
    events: Events,
    rng: GameRng,
    victory: Option<VictoryEffect>,
    ball: hecs::Entity,
    tick: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::build(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        // Create paddles
        let paddle_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Left, paddle_y);
        create_paddle(&mut world, Side::Right, paddle_y);

        // Create ball
        let ball = create_ball(&mut world, config.court_center(), Vec2::ZERO);

        let mut game = Self {
            world,
            config,
            state: MatchState::default(),
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            victory: None,
            ball,
            tick: 0,
        };
        game.restart();
        game
    }

    /// Zero the scores, clear the outcome and serve at base speed
    pub fn restart(&mut self) {
        self.score = Score::new();
        self.state.reset_outcome();
        self.victory = None;
        self.events.clear();

        let base = self.config.ball_speed_initial;
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.vel = Vec2::new(base, base);
        }
        self.reset_ball();

        log::debug!(
            "Restarted: mode={} difficulty={}",
            self.state.mode,
            self.state.difficulty
        );
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.state.mode = mode;
        self.restart();
    }

    /// Stored in every mode, only used by the AI in single-player
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
        self.restart();
    }

    /// Recenter the ball for the next serve, keeping rally speed
    pub fn reset_ball(&mut self) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(&self.config, &mut self.rng);
        }
    }

    /// End the match if either side has reached the winning score
    pub fn check_winner(&mut self) {
        check_winner(
            &self.config,
            &mut self.state,
            &self.score,
            &mut self.events,
            &mut self.rng,
            &mut self.victory,
        );
    }

    /// Advance one tick using the currently held keys
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.state,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &mut self.victory,
        );
        self.tick += 1;
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Held-key flags; changes take effect on the next tick
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn set_key(&mut self, side: Side, up: bool, pressed: bool) {
        let paddle = self.input.paddle_mut(side);
        if up {
            paddle.up = pressed;
        } else {
            paddle.down = pressed;
        }
    }

    /// Drop every held key, e.g. when the page loses focus and key-up events are lost
    pub fn release_keys(&mut self) {
        self.input.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn victory(&self) -> Option<&VictoryEffect> {
        self.victory.as_ref()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.config.court_center(), Vec2::ZERO))
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or_else(|| self.config.paddle_spawn_y())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle_y: self.paddle_y(Side::Left),
            right_paddle_y: self.paddle_y(Side::Right),
            ball_pos: self.ball().pos,
            score: self.score,
            game_over: self.state.game_over,
            winner: self.state.winner,
            animation_frame: self.victory.as_ref().map_or(0, |v| v.frame),
        }
    }

    /// Direct access for tests and tooling that need to stage positions
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
}
