//! Software backend input: scancode space and keyboard queries
//!
//! The software stack uses the USB HID usage-page numbering for its native
//! scancode space (the same table SDL uses), so its event scripts look like
//! real platform traffic. The [`map_key`] function is total: any key the
//! table does not cover resolves to [`scancode::UNKNOWN`], which always
//! queries as "not down".

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::{Input, Key, KeyboardState};

/// Native scancode values (USB HID keyboard usage IDs).
#[allow(missing_docs)]
pub(crate) mod scancode {
    pub const UNKNOWN: usize = 0;
    pub const A: usize = 4;
    pub const ONE: usize = 30;
    pub const ZERO: usize = 39;
    pub const RETURN: usize = 40;
    pub const ESCAPE: usize = 41;
    pub const BACKSPACE: usize = 42;
    pub const TAB: usize = 43;
    pub const SPACE: usize = 44;
    pub const MINUS: usize = 45;
    pub const EQUALS: usize = 46;
    pub const LEFT_BRACKET: usize = 47;
    pub const RIGHT_BRACKET: usize = 48;
    pub const BACKSLASH: usize = 49;
    pub const SEMICOLON: usize = 51;
    pub const APOSTROPHE: usize = 52;
    pub const GRAVE: usize = 53;
    pub const COMMA: usize = 54;
    pub const PERIOD: usize = 55;
    pub const SLASH: usize = 56;
    pub const CAPS_LOCK: usize = 57;
    pub const F1: usize = 58;
    pub const PRINT_SCREEN: usize = 70;
    pub const SCROLL_LOCK: usize = 71;
    pub const PAUSE: usize = 72;
    pub const INSERT: usize = 73;
    pub const HOME: usize = 74;
    pub const PAGE_UP: usize = 75;
    pub const DELETE: usize = 76;
    pub const END: usize = 77;
    pub const PAGE_DOWN: usize = 78;
    pub const RIGHT: usize = 79;
    pub const LEFT: usize = 80;
    pub const DOWN: usize = 81;
    pub const UP: usize = 82;
    pub const NUM_LOCK: usize = 83;
    pub const KP_DIVIDE: usize = 84;
    pub const KP_MULTIPLY: usize = 85;
    pub const KP_MINUS: usize = 86;
    pub const KP_PLUS: usize = 87;
    pub const KP_ENTER: usize = 88;
    pub const KP_1: usize = 89;
    pub const KP_0: usize = 98;
    pub const KP_PERIOD: usize = 99;
    pub const KP_EQUALS: usize = 103;
    pub const VOLUME_UP: usize = 128;
    pub const VOLUME_DOWN: usize = 129;
    pub const LEFT_CTRL: usize = 224;
    pub const LEFT_SHIFT: usize = 225;
    pub const LEFT_ALT: usize = 226;
    pub const LEFT_SUPER: usize = 227;
    pub const RIGHT_CTRL: usize = 228;
    pub const RIGHT_SHIFT: usize = 229;
    pub const RIGHT_ALT: usize = 230;
    pub const RIGHT_SUPER: usize = 231;
    pub const AC_BACK: usize = 270;

    /// Size of the scancode space.
    pub const COUNT: usize = 512;
}

/// Total mapping from the portable key enum into the scancode space.
pub(crate) fn map_key(key: Key) -> usize {
    match key {
        Key::Null => scancode::UNKNOWN,
        Key::Apostrophe => scancode::APOSTROPHE,
        Key::Comma => scancode::COMMA,
        Key::Minus => scancode::MINUS,
        Key::Period => scancode::PERIOD,
        Key::Slash => scancode::SLASH,
        Key::Zero => scancode::ZERO,
        Key::One => scancode::ONE,
        Key::Two => scancode::ONE + 1,
        Key::Three => scancode::ONE + 2,
        Key::Four => scancode::ONE + 3,
        Key::Five => scancode::ONE + 4,
        Key::Six => scancode::ONE + 5,
        Key::Seven => scancode::ONE + 6,
        Key::Eight => scancode::ONE + 7,
        Key::Nine => scancode::ONE + 8,
        Key::Semicolon => scancode::SEMICOLON,
        Key::Equal => scancode::EQUALS,
        Key::A => scancode::A,
        Key::B => scancode::A + 1,
        Key::C => scancode::A + 2,
        Key::D => scancode::A + 3,
        Key::E => scancode::A + 4,
        Key::F => scancode::A + 5,
        Key::G => scancode::A + 6,
        Key::H => scancode::A + 7,
        Key::I => scancode::A + 8,
        Key::J => scancode::A + 9,
        Key::K => scancode::A + 10,
        Key::L => scancode::A + 11,
        Key::M => scancode::A + 12,
        Key::N => scancode::A + 13,
        Key::O => scancode::A + 14,
        Key::P => scancode::A + 15,
        Key::Q => scancode::A + 16,
        Key::R => scancode::A + 17,
        Key::S => scancode::A + 18,
        Key::T => scancode::A + 19,
        Key::U => scancode::A + 20,
        Key::V => scancode::A + 21,
        Key::W => scancode::A + 22,
        Key::X => scancode::A + 23,
        Key::Y => scancode::A + 24,
        Key::Z => scancode::A + 25,
        Key::LeftBracket => scancode::LEFT_BRACKET,
        Key::Backslash => scancode::BACKSLASH,
        Key::RightBracket => scancode::RIGHT_BRACKET,
        Key::Grave => scancode::GRAVE,
        Key::Space => scancode::SPACE,
        Key::Escape => scancode::ESCAPE,
        Key::Enter => scancode::RETURN,
        Key::Tab => scancode::TAB,
        Key::Backspace => scancode::BACKSPACE,
        Key::Insert => scancode::INSERT,
        Key::Delete => scancode::DELETE,
        Key::Right => scancode::RIGHT,
        Key::Left => scancode::LEFT,
        Key::Down => scancode::DOWN,
        Key::Up => scancode::UP,
        Key::PageUp => scancode::PAGE_UP,
        Key::PageDown => scancode::PAGE_DOWN,
        Key::Home => scancode::HOME,
        Key::End => scancode::END,
        Key::CapsLock => scancode::CAPS_LOCK,
        Key::ScrollLock => scancode::SCROLL_LOCK,
        Key::NumLock => scancode::NUM_LOCK,
        Key::PrintScreen => scancode::PRINT_SCREEN,
        Key::Pause => scancode::PAUSE,
        Key::F1 => scancode::F1,
        Key::F2 => scancode::F1 + 1,
        Key::F3 => scancode::F1 + 2,
        Key::F4 => scancode::F1 + 3,
        Key::F5 => scancode::F1 + 4,
        Key::F6 => scancode::F1 + 5,
        Key::F7 => scancode::F1 + 6,
        Key::F8 => scancode::F1 + 7,
        Key::F9 => scancode::F1 + 8,
        Key::F10 => scancode::F1 + 9,
        Key::F11 => scancode::F1 + 10,
        Key::F12 => scancode::F1 + 11,
        Key::LeftShift => scancode::LEFT_SHIFT,
        Key::LeftControl => scancode::LEFT_CTRL,
        Key::LeftAlt => scancode::LEFT_ALT,
        Key::LeftSuper => scancode::LEFT_SUPER,
        Key::RightShift => scancode::RIGHT_SHIFT,
        Key::RightControl => scancode::RIGHT_CTRL,
        Key::RightAlt => scancode::RIGHT_ALT,
        Key::RightSuper => scancode::RIGHT_SUPER,
        Key::Kp0 => scancode::KP_0,
        Key::Kp1 => scancode::KP_1,
        Key::Kp2 => scancode::KP_1 + 1,
        Key::Kp3 => scancode::KP_1 + 2,
        Key::Kp4 => scancode::KP_1 + 3,
        Key::Kp5 => scancode::KP_1 + 4,
        Key::Kp6 => scancode::KP_1 + 5,
        Key::Kp7 => scancode::KP_1 + 6,
        Key::Kp8 => scancode::KP_1 + 7,
        Key::Kp9 => scancode::KP_1 + 8,
        Key::KpDecimal => scancode::KP_PERIOD,
        Key::KpDivide => scancode::KP_DIVIDE,
        Key::KpMultiply => scancode::KP_MULTIPLY,
        Key::KpSubtract => scancode::KP_MINUS,
        Key::KpAdd => scancode::KP_PLUS,
        Key::KpEnter => scancode::KP_ENTER,
        Key::KpEqual => scancode::KP_EQUALS,
        Key::Back => scancode::AC_BACK,
        Key::VolumeUp => scancode::VOLUME_UP,
        Key::VolumeDown => scancode::VOLUME_DOWN,
    }
}

/// Keyboard queries over the tracker fed by the software window's pump.
///
/// The tracker is shared with the window inside one backend instance; this
/// type is the read side.
pub struct SoftInput {
    keyboard: Rc<RefCell<KeyboardState>>,
}

impl SoftInput {
    pub(crate) fn new(keyboard: Rc<RefCell<KeyboardState>>) -> Self {
        Self { keyboard }
    }
}

impl Input for SoftInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.borrow().is_down(map_key(key))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keyboard.borrow().is_pressed(map_key(key))
    }

    fn is_key_released(&self, key: Key) -> bool {
        self.keyboard.borrow().is_released(map_key(key))
    }
}
