use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{PaddleInput, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player 1
    pub right: u8, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// Left is checked first, so it wins a synthetic tie
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_won: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn mark_scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

/// Keys currently held for both paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut PaddleInput {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Unrecognized mode or difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameMode {
    #[default]
    OnePlayer, // Right paddle driven by the AI
    TwoPlayers,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::OnePlayer => "onePlayer",
            GameMode::TwoPlayers => "twoPlayers",
        }
    }

    pub fn ai_controls(self, side: Side) -> bool {
        self == GameMode::OnePlayer && side == Side::Right
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onePlayer" => Ok(GameMode::OnePlayer),
            "twoPlayers" => Ok(GameMode::TwoPlayers),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI opponent strength (single-player only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a UI value, falling back to easy for anything unknown
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: ParseError| {
            log::warn!("{err}, falling back to {}", Difficulty::Easy);
            Difficulty::Easy
        })
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode, difficulty and match outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub game_over: bool,
    pub winner: Option<Side>,
}

impl MatchState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            game_over: false,
            winner: None,
        }
    }

    /// Clear the outcome, keeping mode and difficulty
    pub fn reset_outcome(&mut self) {
        self.game_over = false;
        self.winner = None;
    }
}
