//! Keyboard fallback: hold Space to press the button.

use log::debug;

use super::cell::FlagWriter;

/// `KeyboardEvent.code` of the fallback key.
pub const FALLBACK_KEY: &str = "Space";

/// Source tag of keyboard writes on the pressed cell.
const KEYBOARD_SOURCE: u8 = 2;

pub struct KeyboardFallback {
    pressed: FlagWriter,
}

impl KeyboardFallback {
    pub fn new(pressed: FlagWriter) -> Self {
        Self {
            pressed: pressed.tagged(KEYBOARD_SOURCE),
        }
    }

    /// Returns `true` if the key was the fallback key.
    pub fn on_key_down(&mut self, code: &str) -> bool {
        self.apply(code, true)
    }

    /// Returns `true` if the key was the fallback key.
    pub fn on_key_up(&mut self, code: &str) -> bool {
        self.apply(code, false)
    }

    fn apply(&mut self, code: &str, down: bool) -> bool {
        if code != FALLBACK_KEY {
            return false;
        }
        if self.pressed.set(down) {
            debug!("Keyboard: pressed={}", down);
        }
        true
    }
}
