//! Headless backend input
//!
//! With no native library underneath, the headless backend's "scancode
//! space" is simply the portable key enum itself: the discriminant is the
//! code. The mapping is total by construction, with [`crate::input::Key::Null`]
//! doubling as the unknown code.

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::{Input, Key, KeyboardState};

/// Size of the headless key-code space (comfortably above the enum).
pub(crate) const KEY_CODE_SPACE: usize = 128;

/// Total key → code mapping: the enum discriminant.
pub(crate) fn key_code(key: Key) -> usize {
    key as usize
}

/// Keyboard queries over the tracker fed by the headless window's pump.
pub struct HeadlessInput {
    keyboard: Rc<RefCell<KeyboardState>>,
}

impl HeadlessInput {
    pub(crate) fn new(keyboard: Rc<RefCell<KeyboardState>>) -> Self {
        Self { keyboard }
    }
}

impl Input for HeadlessInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.borrow().is_down(key_code(key))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keyboard.borrow().is_pressed(key_code(key))
    }

    fn is_key_released(&self, key: Key) -> bool {
        self.keyboard.borrow().is_released(key_code(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_fit_the_code_space() {
        assert!(key_code(Key::VolumeDown) < KEY_CODE_SPACE);
        assert_eq!(key_code(Key::Null), 0);
    }
}
