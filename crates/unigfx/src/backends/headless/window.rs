//! Headless backend window: full window semantics, no display

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::backends::headless::input::key_code;
use crate::foundation::time::FrameClock;
use crate::input::{Key, KeyboardState};
use crate::types::WindowFlags;
use crate::window::{Window, WindowError};

/// Event value for the headless backend's pump, injected by tests or
/// driver scripts via [`crate::backends::headless::HeadlessBackend::push_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessEvent {
    /// A key went down (or auto-repeated while held)
    KeyDown {
        /// Which key
        key: Key,
        /// True for auto-repeat events
        repeat: bool,
    },
    /// A key came back up
    KeyUp {
        /// Which key
        key: Key,
    },
    /// Close request for the window
    Quit,
}

/// A window that exists only as state: timing, pacing, close flag, and
/// reconfiguration all behave exactly like a real window's, which is what
/// makes this backend usable for lifecycle tests and CI driver scripts.
pub struct HeadlessWindow {
    events: Rc<RefCell<VecDeque<HeadlessEvent>>>,
    keyboard: Rc<RefCell<KeyboardState>>,
    clock: FrameClock,
    title: String,
    width: u32,
    height: u32,
    flags: WindowFlags,
    created: bool,
    should_close: bool,
}

impl HeadlessWindow {
    pub(crate) fn new(
        events: Rc<RefCell<VecDeque<HeadlessEvent>>>,
        keyboard: Rc<RefCell<KeyboardState>>,
    ) -> Self {
        Self {
            events,
            keyboard,
            clock: FrameClock::new(),
            title: String::new(),
            width: 0,
            height: 0,
            flags: WindowFlags::empty(),
            created: false,
            should_close: false,
        }
    }

    /// Whether [`Window::create`] has run (and no shutdown since).
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.created
    }
}

impl Window for HeadlessWindow {
    fn create(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
    ) -> Result<(), WindowError> {
        if width == 0 || height == 0 {
            return Err(WindowError::CreationFailed(format!(
                "zero-sized window ({width}x{height})"
            )));
        }
        // Every flag is "supported" here in the sense that there is nothing
        // to apply it to; the set is recorded verbatim.
        self.title = title.to_string();
        self.width = width;
        self.height = height;
        self.flags = flags;
        self.created = true;
        self.should_close = false;
        log::info!("headless window \"{title}\" configured at {width}x{height}");
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn poll_events(&mut self) {
        {
            let mut keyboard = self.keyboard.borrow_mut();
            keyboard.begin_frame();
            for event in self.events.borrow_mut().drain(..) {
                match event {
                    HeadlessEvent::KeyDown { key, repeat } => {
                        keyboard.key_down(key_code(key), repeat);
                    }
                    HeadlessEvent::KeyUp { key } => keyboard.key_up(key_code(key)),
                    HeadlessEvent::Quit => self.should_close = true,
                }
            }
        }
        self.clock.pace();
    }

    fn set_target_fps(&mut self, fps: u32) {
        self.clock.set_target_fps(fps);
    }

    fn delta_time(&mut self) -> f32 {
        self.clock.delta_time()
    }

    fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    fn shutdown(&mut self) {
        if self.created {
            log::info!("headless window \"{}\" shut down", self.title);
            self.created = false;
        }
    }
}

impl Drop for HeadlessWindow {
    fn drop(&mut self) {
        self.shutdown();
    }
}
