//! Headless backend
//!
//! A backend with no output at all: the window is pure state, the renderer
//! validates assets and counts traffic. It exists so lifecycle, input, and
//! resource contracts can be exercised anywhere a display (or even a
//! framebuffer) is unavailable, and so applications have a second kind to
//! hot-swap against.

mod input;
mod renderer;
mod window;

use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::backend::{BackendError, BackendKind, GraphicsBackend};
use crate::input::{Input as InputTrait, KeyboardState};
use crate::renderer::Renderer as RendererTrait;
use crate::window::Window as WindowTrait;

pub use input::HeadlessInput;
pub use renderer::HeadlessRenderer;
pub use window::{HeadlessEvent, HeadlessWindow};

/// The composed headless backend. Field order is teardown order.
pub struct HeadlessBackend {
    renderer: HeadlessRenderer,
    window: HeadlessWindow,
    input: HeadlessInput,
    events: Rc<RefCell<VecDeque<HeadlessEvent>>>,
}

impl HeadlessBackend {
    /// Bring up the headless stack. There is no global subsystem to claim,
    /// so construction cannot fail today; the `Result` keeps the factory
    /// contract uniform across kinds.
    ///
    /// # Errors
    /// Currently never.
    pub fn new() -> Result<Self, BackendError> {
        let events = Rc::new(RefCell::new(VecDeque::new()));
        let keyboard = Rc::new(RefCell::new(KeyboardState::new(input::KEY_CODE_SPACE)));

        let window = HeadlessWindow::new(Rc::clone(&events), Rc::clone(&keyboard));
        let input = HeadlessInput::new(Rc::clone(&keyboard));
        let renderer = HeadlessRenderer::new();

        Ok(Self {
            renderer,
            window,
            input,
            events,
        })
    }

    /// Queue an event for the next [`WindowTrait::poll_events`] pass.
    pub fn push_event(&mut self, event: HeadlessEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl GraphicsBackend for HeadlessBackend {
    fn window(&mut self) -> &mut dyn WindowTrait {
        &mut self.window
    }

    fn input(&self) -> &dyn InputTrait {
        &self.input
    }

    fn renderer(&mut self) -> &mut dyn RendererTrait {
        &mut self.renderer
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Headless
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
