//! Keyboard input contract and edge-detection state machine
//!
//! Backends deliver raw, possibly level-triggered key events; the tracker in
//! this module turns them into edge-triggered "pressed this frame" /
//! "released this frame" semantics. Each backend owns one
//! [`KeyboardState`] sized to its native scancode space and feeds it from
//! its event pump; the public [`Input`] trait is a read-only view over it.

/// Backend-neutral physical key identifiers.
///
/// Every backend supplies a *total* mapping from `Key` to its native
/// scancode: keys the backend does not know resolve to its "unknown" code
/// so input polling can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // enumerators are self-describing
pub enum Key {
    /// Placeholder for "no key" / unrecognized keys
    Null,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Semicolon,
    Equal,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    LeftBracket,
    Backslash,
    RightBracket,
    Grave,
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpSubtract,
    KpAdd,
    KpEnter,
    KpEqual,
    Back,
    VolumeUp,
    VolumeDown,
}

/// Read-only keyboard queries exposed to applications.
///
/// `is_key_pressed` / `is_key_released` are frame-scoped: they hold for
/// exactly the frame in which the edge was observed. `is_key_down` is the
/// level state and `is_key_up` its negation. Queries for keys the backend
/// cannot map report `false`, never an error.
pub trait Input {
    /// Whether the key is currently held down.
    fn is_key_down(&self, key: Key) -> bool;

    /// Whether the key transitioned up→down during the last event pump.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Whether the key transitioned down→up during the last event pump.
    fn is_key_released(&self, key: Key) -> bool;

    /// Whether the key is currently up.
    fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }
}

/// Fixed-size bit vector indexed by native scancode.
///
/// Out-of-range operations are silently absorbed; an out-of-range test
/// reads as unset.
struct ScancodeSet {
    words: Box<[u64]>,
    len: usize,
}

impl ScancodeSet {
    fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)].into_boxed_slice(),
            len,
        }
    }

    fn set(&mut self, code: usize) {
        if code < self.len {
            self.words[code / 64] |= 1 << (code % 64);
        }
    }

    fn unset(&mut self, code: usize) {
        if code < self.len {
            self.words[code / 64] &= !(1 << (code % 64));
        }
    }

    fn test(&self, code: usize) -> bool {
        code < self.len && self.words[code / 64] & (1 << (code % 64)) != 0
    }

    fn zero(&mut self) {
        self.words.fill(0);
    }
}

/// Per-scancode key state machine.
///
/// Three disjoint vectors: the persistent level state and two frame-scoped
/// edge vectors. Invariants maintained here: a code in `pressed` is always
/// also in `down`, and a code in `released` is never in `down`. Key-repeat
/// events are no-ops on all three.
pub struct KeyboardState {
    down: ScancodeSet,
    pressed: ScancodeSet,
    released: ScancodeSet,
}

impl KeyboardState {
    /// Create a tracker covering `scancode_count` native codes.
    #[must_use]
    pub fn new(scancode_count: usize) -> Self {
        Self {
            down: ScancodeSet::new(scancode_count),
            pressed: ScancodeSet::new(scancode_count),
            released: ScancodeSet::new(scancode_count),
        }
    }

    /// Start a new event-processing pass: forget last frame's edges.
    ///
    /// The level state persists until an explicit up transition.
    pub fn begin_frame(&mut self) {
        self.pressed.zero();
        self.released.zero();
    }

    /// Record a native key-down event.
    ///
    /// Only the first non-repeat press produces a pressed edge; auto-repeat
    /// events while the key is held change nothing.
    pub fn key_down(&mut self, code: usize, repeat: bool) {
        if repeat || self.down.test(code) {
            return;
        }
        self.down.set(code);
        self.pressed.set(code);
    }

    /// Record a native key-up event.
    pub fn key_up(&mut self, code: usize) {
        self.down.unset(code);
        self.released.set(code);
    }

    /// Level query.
    #[must_use]
    pub fn is_down(&self, code: usize) -> bool {
        self.down.test(code)
    }

    /// Edge query: pressed during the current frame.
    #[must_use]
    pub fn is_pressed(&self, code: usize) -> bool {
        self.pressed.test(code)
    }

    /// Edge query: released during the current frame.
    #[must_use]
    pub fn is_released(&self, code: usize) -> bool {
        self.released.test(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: usize = 42;

    #[test]
    fn press_repeat_release_sequence() {
        let mut state = KeyboardState::new(128);

        // Frame 1: first press.
        state.begin_frame();
        state.key_down(K, false);
        assert!(state.is_down(K));
        assert!(state.is_pressed(K));
        assert!(!state.is_released(K));

        // Frame 2: auto-repeat only.
        state.begin_frame();
        state.key_down(K, true);
        assert!(state.is_down(K));
        assert!(!state.is_pressed(K), "repeat must not re-trigger pressed");
        assert!(!state.is_released(K));

        // Frame 3: a second non-repeat down while held is still no edge.
        state.begin_frame();
        state.key_down(K, false);
        assert!(state.is_down(K));
        assert!(!state.is_pressed(K));

        // Frame 4: release.
        state.begin_frame();
        state.key_up(K);
        assert!(!state.is_down(K));
        assert!(!state.is_pressed(K));
        assert!(state.is_released(K));

        // Frame 5: nothing.
        state.begin_frame();
        assert!(!state.is_down(K));
        assert!(!state.is_pressed(K));
        assert!(!state.is_released(K));
    }

    #[test]
    fn edges_are_frame_scoped_but_level_persists() {
        let mut state = KeyboardState::new(128);
        state.begin_frame();
        state.key_down(K, false);
        assert!(state.is_pressed(K));

        state.begin_frame();
        assert!(state.is_down(K), "level state survives the frame boundary");
        assert!(!state.is_pressed(K));
        assert!(!state.is_released(K));
    }

    #[test]
    fn pressed_implies_down_and_released_excludes_down() {
        let mut state = KeyboardState::new(128);
        state.begin_frame();
        state.key_down(K, false);
        assert!(state.is_pressed(K) && state.is_down(K));

        state.begin_frame();
        state.key_up(K);
        assert!(state.is_released(K) && !state.is_down(K));
    }

    #[test]
    fn out_of_range_codes_are_absorbed() {
        let mut state = KeyboardState::new(16);
        state.key_down(1000, false);
        state.key_up(usize::MAX);
        assert!(!state.is_down(1000));
        assert!(!state.is_pressed(1000));
        assert!(!state.is_released(usize::MAX));
    }
}
