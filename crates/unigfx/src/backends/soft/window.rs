//! Software backend window: offscreen surface, event queue, frame pacing

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::backends::soft::input::map_key;
use crate::backends::soft::raster::Surface;
use crate::foundation::time::FrameClock;
use crate::input::{Key, KeyboardState};
use crate::types::WindowFlags;
use crate::window::{Window, WindowError};

/// Event value flowing from the software window's pump into its input
/// tracker.
///
/// There is no operating system feeding this backend, so events are
/// injected by the application (or a test script) via
/// [`crate::backends::soft::SoftBackend::push_event`] and drained on the
/// next [`Window::poll_events`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftEvent {
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

/// Window over an offscreen surface.
///
/// The surface sits behind a shared cell so the renderer bound to it keeps
/// working across [`Window::create`] reconfigurations; the window never
/// swaps the cell out, only its contents.
pub struct SoftWindow {
    surface: Rc<RefCell<Surface>>,
    events: Rc<RefCell<VecDeque<SoftEvent>>>,
    keyboard: Rc<RefCell<KeyboardState>>,
    clock: FrameClock,
    title: String,
    flags: WindowFlags,
    should_close: bool,
}

impl SoftWindow {
    pub(crate) fn new(
        surface: Rc<RefCell<Surface>>,
        events: Rc<RefCell<VecDeque<SoftEvent>>>,
        keyboard: Rc<RefCell<KeyboardState>>,
    ) -> Self {
        Self {
            surface,
            events,
            keyboard,
            clock: FrameClock::new(),
            title: String::new(),
            flags: WindowFlags::empty(),
            should_close: false,
        }
    }

    /// Flags the window was last configured with (unsupported bits are kept
    /// but have no effect on an offscreen surface).
    #[must_use]
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Current title bar text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Window for SoftWindow {
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

        // An offscreen surface has no display to go fullscreen on; those
        // bits are accepted and ignored.
        let ignored = flags & (WindowFlags::FULLSCREEN | WindowFlags::VSYNC);
        if !ignored.is_empty() {
            log::debug!("software window ignoring unsupported flags {ignored:?}");
        }

        let mut surface = self.surface.borrow_mut();
        if surface.width != width || surface.height != height {
            surface.resize(width, height);
        }
        // Reconfigure-in-place covers re-creation after a shutdown too.
        surface.open = true;

        self.title = title.to_string();
        self.flags = flags;
        self.should_close = false;
        log::info!("software window \"{title}\" configured at {width}x{height}");
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn size(&self) -> (u32, u32) {
        let surface = self.surface.borrow();
        (surface.width, surface.height)
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
                    SoftEvent::KeyDown { key, repeat } => {
                        keyboard.key_down(map_key(key), repeat);
                    }
                    SoftEvent::KeyUp { key } => keyboard.key_up(map_key(key)),
                    SoftEvent::Quit => self.should_close = true,
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
        self.surface.borrow_mut().close();
    }
}

impl Drop for SoftWindow {
    fn drop(&mut self) {
        self.shutdown();
    }
}
