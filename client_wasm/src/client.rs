//! JavaScript-facing wrapper around a local match

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use game_core::{Difficulty, Game, GameMode, Side};

use crate::input::key_binding;

/// A local Pong match the page drives once per animation frame
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct PongClient {
    game: Game,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl PongClient {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed as u64),
        }
    }

    /// Returns false for keys that do not control a paddle
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        match key_binding(key) {
            Some(binding) => {
                self.game.set_key(binding.side, binding.up, pressed);
                true
            }
            None => false,
        }
    }

    /// Call on window blur so a key released off-page does not stay held
    pub fn release_keys(&mut self) {
        self.game.release_keys();
    }

    pub fn tick(&mut self) {
        self.game.step();
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    /// Accepts "onePlayer" or "twoPlayers"; anything else is ignored
    pub fn set_mode(&mut self, mode: &str) -> bool {
        match mode.parse::<GameMode>() {
            Ok(mode) => {
                self.game.set_mode(mode);
                true
            }
            Err(err) => {
                log::warn!("{err}");
                false
            }
        }
    }

    /// Unknown levels fall back to easy
    pub fn set_difficulty(&mut self, level: &str) {
        self.game.set_difficulty(Difficulty::parse_or_default(level));
    }

    pub fn mode(&self) -> String {
        self.game.state().mode.to_string()
    }

    pub fn difficulty(&self) -> String {
        self.game.state().difficulty.to_string()
    }

    pub fn left_paddle_y(&self) -> f32 {
        self.game.paddle_y(Side::Left)
    }

    pub fn right_paddle_y(&self) -> f32 {
        self.game.paddle_y(Side::Right)
    }

    pub fn ball_x(&self) -> f32 {
        self.game.ball().pos.x
    }

    pub fn ball_y(&self) -> f32 {
        self.game.ball().pos.y
    }

    pub fn score_left(&self) -> u8 {
        self.game.score().left
    }

    pub fn score_right(&self) -> u8 {
        self.game.score().right
    }

    pub fn game_over(&self) -> bool {
        self.game.state().game_over
    }

    /// 0 while playing, otherwise the winning player's number
    pub fn winner(&self) -> u8 {
        self.game.state().winner.map_or(0, Side::player_number)
    }

    pub fn animation_frame(&self) -> u32 {
        self.game.victory().map_or(0, |v| v.frame)
    }

    pub fn pulse_scale(&self) -> f32 {
        self.game.victory().map_or(1.0, |v| v.pulse_scale())
    }

    /// Flat confetti list: x, y, size, r, g, b per particle
    pub fn confetti(&self) -> Vec<f32> {
        let Some(victory) = self.game.victory() else {
            return Vec::new();
        };
        victory
            .particles
            .iter()
            .flat_map(|p| {
                [
                    p.x,
                    p.y,
                    p.size,
                    p.color[0] as f32,
                    p.color[1] as f32,
                    p.color[2] as f32,
                ]
            })
            .collect()
    }

    pub fn court_width(&self) -> f32 {
        self.game.config().court_width
    }

    pub fn court_height(&self) -> f32 {
        self.game.config().court_height
    }

    pub fn paddle_width(&self) -> f32 {
        self.game.config().paddle_width
    }

    pub fn paddle_height(&self) -> f32 {
        self.game.config().paddle_height
    }

    pub fn ball_radius(&self) -> f32 {
        self.game.config().ball_radius
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PongClient {
    /// Feed a DOM keydown/keyup event straight through
    pub fn handle_key_event(&mut self, event: &web_sys::KeyboardEvent, pressed: bool) -> bool {
        let key = crate::input::get_key_from_event(event);
        self.set_key(&key, pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_drive_paddles_in_two_player() {
        let mut client = PongClient::new(1);
        assert!(client.set_mode("twoPlayers"));
        assert!(client.key_down("s"));
        assert!(client.key_down("ArrowUp"));
        assert!(!client.key_down("q"));

        client.tick();

        assert_eq!(client.left_paddle_y(), 160.0);
        assert_eq!(client.right_paddle_y(), 140.0);

        client.key_up("s");
        client.key_up("ArrowUp");
        client.tick();
        assert_eq!(client.left_paddle_y(), 160.0);
    }

    #[test]
    fn test_release_keys_after_focus_loss() {
        let mut client = PongClient::new(1);
        assert!(client.set_mode("twoPlayers"));
        client.key_down("w");
        client.key_down("ArrowDown");

        client.release_keys();
        client.tick();

        assert_eq!(client.left_paddle_y(), 150.0);
        assert_eq!(client.right_paddle_y(), 150.0);
    }

    #[test]
    fn test_unknown_mode_is_ignored() {
        let mut client = PongClient::new(1);
        assert!(!client.set_mode("fourPlayers"));
        assert_eq!(client.mode(), "onePlayer");
    }

    #[test]
    fn test_unknown_difficulty_defaults_to_easy() {
        let mut client = PongClient::new(1);
        client.set_difficulty("hard");
        assert_eq!(client.difficulty(), "hard");
        client.set_difficulty("nightmare");
        assert_eq!(client.difficulty(), "easy");
    }

    #[test]
    fn test_initial_view() {
        let client = PongClient::new(1);
        assert_eq!((client.ball_x(), client.ball_y()), (400.0, 200.0));
        assert_eq!((client.score_left(), client.score_right()), (0, 0));
        assert!(!client.game_over());
        assert_eq!(client.winner(), 0);
        assert_eq!(client.animation_frame(), 0);
        assert_eq!(client.pulse_scale(), 1.0);
        assert!(client.confetti().is_empty());
        assert_eq!(client.court_width(), 800.0);
        assert_eq!(client.court_height(), 400.0);
        assert_eq!(client.paddle_height(), 100.0);
        assert_eq!(client.paddle_width(), 10.0);
        assert_eq!(client.ball_radius(), 10.0);
    }

    #[test]
    fn test_confetti_after_win() {
        let mut client = PongClient::new(9);
        client.set_difficulty("easy");
        for _ in 0..200_000 {
            client.tick();
            if client.game_over() {
                break;
            }
        }

        assert!(client.game_over());
        assert!(client.winner() == 1 || client.winner() == 2);
        assert_eq!(client.confetti().len(), 100 * 6);

        client.restart();
        assert!(!client.game_over());
        assert!(client.confetti().is_empty());
    }
}
