//! Keyboard input handling

use game_core::Side;

/// A key that drives one paddle in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub side: Side,
    pub up: bool,
}

/// W/S for player 1, arrow keys for player 2
pub fn key_binding(key: &str) -> Option<KeyBinding> {
    match key {
        "w" | "W" => Some(KeyBinding {
            side: Side::Left,
            up: true,
        }),
        "s" | "S" => Some(KeyBinding {
            side: Side::Left,
            up: false,
        }),
        "ArrowUp" => Some(KeyBinding {
            side: Side::Right,
            up: true,
        }),
        "ArrowDown" => Some(KeyBinding {
            side: Side::Right,
            up: false,
        }),
        _ => None,
    }
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_one_keys() {
        assert_eq!(
            key_binding("w"),
            Some(KeyBinding {
                side: Side::Left,
                up: true
            })
        );
        assert_eq!(key_binding("W"), key_binding("w"));
        assert_eq!(
            key_binding("S"),
            Some(KeyBinding {
                side: Side::Left,
                up: false
            })
        );
    }

    #[test]
    fn test_player_two_keys() {
        assert_eq!(key_binding("ArrowUp").map(|b| b.side), Some(Side::Right));
        assert_eq!(key_binding("ArrowDown").map(|b| b.up), Some(false));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(key_binding("x"), None);
        assert_eq!(key_binding("arrowup"), None);
        assert_eq!(key_binding(""), None);
    }
}
